use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum UserQueryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
}
