use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::language::application::ports::outgoing::{
    LanguageData, LanguageResult, Proficiency,
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum LanguageCommandError {
    EmptyName,
    NameTooLong,
    UnknownProficiency(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for LanguageCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageCommandError::EmptyName => write!(f, "Language name cannot be empty"),
            LanguageCommandError::NameTooLong => {
                write!(f, "Language name must not exceed 80 characters")
            }
            LanguageCommandError::UnknownProficiency(given) => write!(
                f,
                "Unknown proficiency `{}` (expected basic|conversational|fluent|native)",
                given
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageCommand(LanguageData);

impl LanguageCommand {
    pub fn new(name: String, proficiency: String) -> Result<Self, LanguageCommandError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(LanguageCommandError::EmptyName);
        }
        if name.len() > 80 {
            return Err(LanguageCommandError::NameTooLong);
        }

        let proficiency = Proficiency::parse(&proficiency)
            .ok_or(LanguageCommandError::UnknownProficiency(proficiency))?;

        Ok(Self(LanguageData { name, proficiency }))
    }

    pub fn into_data(self) -> LanguageData {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ListLanguagesError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListLanguagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListLanguagesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListLanguagesUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<LanguageResult>, ListLanguagesError>;
}

#[derive(Debug, Clone)]
pub enum CreateLanguageError {
    NameAlreadyExists,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for CreateLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateLanguageError::NameAlreadyExists => write!(f, "language already exists"),
            CreateLanguageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateLanguageUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: LanguageCommand,
    ) -> Result<LanguageResult, CreateLanguageError>;
}

#[derive(Debug, Clone)]
pub enum GetLanguageError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetLanguageError::NotFound => write!(f, "language not found"),
            GetLanguageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetLanguageUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        language_id: Uuid,
    ) -> Result<LanguageResult, GetLanguageError>;
}

#[derive(Debug, Clone)]
pub enum UpdateLanguageError {
    NotFound,
    NameAlreadyExists,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateLanguageError::NotFound => write!(f, "language not found"),
            UpdateLanguageError::NameAlreadyExists => write!(f, "language already exists"),
            UpdateLanguageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateLanguageUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        language_id: Uuid,
        command: LanguageCommand,
    ) -> Result<LanguageResult, UpdateLanguageError>;
}

#[derive(Debug, Clone)]
pub enum DeleteLanguageError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for DeleteLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteLanguageError::NotFound => write!(f, "language not found"),
            DeleteLanguageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteLanguageUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, language_id: Uuid) -> Result<(), DeleteLanguageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_rejects_unknown_proficiency() {
        let result = LanguageCommand::new("German".to_string(), "expert".to_string());
        assert!(matches!(
            result,
            Err(LanguageCommandError::UnknownProficiency(given)) if given == "expert"
        ));
    }

    #[test]
    fn test_command_accepts_known_proficiency() {
        let data = LanguageCommand::new("German".to_string(), "fluent".to_string())
            .unwrap()
            .into_data();
        assert_eq!(data.proficiency, Proficiency::Fluent);
    }
}
