use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct EducationData {
    pub school: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_year: i16,
    /// None = ongoing
    pub end_year: Option<i16>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResult {
    pub id: Uuid,
    pub owner: UserId,
    pub school: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_year: i16,
    pub end_year: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Education entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<EducationResult>, EducationRepositoryError>;

    async fn find_for_owner(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<Option<EducationResult>, EducationRepositoryError>;

    async fn insert(
        &self,
        owner: UserId,
        data: EducationData,
    ) -> Result<EducationResult, EducationRepositoryError>;

    async fn update(
        &self,
        owner: UserId,
        entry_id: Uuid,
        data: EducationData,
    ) -> Result<EducationResult, EducationRepositoryError>;

    async fn delete(&self, owner: UserId, entry_id: Uuid)
        -> Result<(), EducationRepositoryError>;
}
