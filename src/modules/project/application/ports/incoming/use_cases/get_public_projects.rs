use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

#[derive(Debug, Clone)]
pub enum GetPublicProjectsError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetPublicProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetPublicProjectsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

/// Unauthenticated listing; the route resolves `owner` from the public
/// username first.
#[async_trait]
pub trait GetPublicProjectsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<ProjectResult>, GetPublicProjectsError>;
}
