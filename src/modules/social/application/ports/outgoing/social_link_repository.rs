use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct SocialLinkData {
    pub platform: String,
    pub url: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkResult {
    pub id: Uuid,
    pub owner: UserId,
    pub platform: String,
    pub url: String,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocialLinkRepositoryError {
    #[error("Social link not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SocialLinkRepository: Send + Sync {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<SocialLinkResult>, SocialLinkRepositoryError>;

    async fn find_for_owner(
        &self,
        owner: UserId,
        link_id: Uuid,
    ) -> Result<Option<SocialLinkResult>, SocialLinkRepositoryError>;

    async fn insert(
        &self,
        owner: UserId,
        data: SocialLinkData,
    ) -> Result<SocialLinkResult, SocialLinkRepositoryError>;

    async fn update(
        &self,
        owner: UserId,
        link_id: Uuid,
        data: SocialLinkData,
    ) -> Result<SocialLinkResult, SocialLinkRepositoryError>;

    async fn delete(&self, owner: UserId, link_id: Uuid)
        -> Result<(), SocialLinkRepositoryError>;
}
