use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

#[derive(Debug, Clone)]
pub enum GetSingleProjectError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetSingleProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleProjectError::NotFound => write!(f, "project not found"),
            GetSingleProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<ProjectResult, GetSingleProjectError>;
}
