use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub enum DeleteProjectError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for DeleteProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectError::NotFound => write!(f, "project not found"),
            DeleteProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, project_id: Uuid) -> Result<(), DeleteProjectError>;
}
