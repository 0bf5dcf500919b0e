use async_trait::async_trait;
use email_address::EmailAddress;
use std::fmt;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::user_repository::NewUser;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Command (validated at construction)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
    full_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterUserCommandError {
    InvalidUsername(String),
    InvalidEmail(String),
    InvalidPassword(String),
    InvalidFullName(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for RegisterUserCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterUserCommandError::InvalidUsername(msg)
            | RegisterUserCommandError::InvalidEmail(msg)
            | RegisterUserCommandError::InvalidPassword(msg)
            | RegisterUserCommandError::InvalidFullName(msg) => write!(f, "{}", msg),
        }
    }
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
        full_name: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = username.trim().to_string();
        if username.len() < 3 || username.len() > 50 {
            return Err(RegisterUserCommandError::InvalidUsername(
                "Username must be between 3 and 50 characters".to_string(),
            ));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(RegisterUserCommandError::InvalidUsername(
                "Username may only contain letters, digits, '_' and '-'".to_string(),
            ));
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        if password.len() < 8 {
            return Err(RegisterUserCommandError::InvalidPassword(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let full_name = full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| username.clone());
        if full_name.len() > 100 {
            return Err(RegisterUserCommandError::InvalidFullName(
                "Full name must not exceed 100 characters".to_string(),
            ));
        }

        Ok(Self {
            username,
            email,
            password,
            full_name,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum RegisterUserError {
    UsernameAlreadyExists,
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterUserError::UsernameAlreadyExists => write!(f, "Username already taken"),
            RegisterUserError::EmailAlreadyExists => write!(f, "Email already registered"),
            RegisterUserError::HashingFailed(msg) => write!(f, "Hashing failed: {}", msg),
            RegisterUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError>;
}

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError> {
        if let Ok(Some(_)) = self.query.find_by_username(command.username()).await {
            return Err(RegisterUserError::UsernameAlreadyExists);
        }

        if let Ok(Some(_)) = self.query.find_by_email(command.email()).await {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let new_user = NewUser {
            username: command.username,
            email: command.email,
            password_hash,
            full_name: command.full_name,
        };

        match self.repository.create_user(new_user).await {
            Ok(user) => Ok(user),
            // Unique index beat us to it between the check and the insert
            Err(UserRepositoryError::UserAlreadyExists) => {
                Err(RegisterUserError::EmailAlreadyExists)
            }
            Err(UserRepositoryError::DatabaseError(e)) => Err(RegisterUserError::RepositoryError(e)),
            Err(e) => Err(RegisterUserError::RepositoryError(e.to_string())),
        }
    }
}
