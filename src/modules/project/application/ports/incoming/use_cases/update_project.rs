use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectResult, UpdateProjectData,
};

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::NotFound => write!(f, "project not found"),
            UpdateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectResult, UpdateProjectError>;
}
