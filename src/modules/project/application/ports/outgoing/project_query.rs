use async_trait::async_trait;
use uuid::Uuid;

use super::project_repository::ProjectResult;
use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side; always owner-scoped. Public listings go through the same
/// port with an owner resolved from a username.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<ProjectResult>, ProjectQueryError>;

    async fn find_for_owner(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Option<ProjectResult>, ProjectQueryError>;
}
