use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

#[derive(Debug, Clone)]
pub enum GetProjectsError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<ProjectResult>, GetProjectsError>;
}
