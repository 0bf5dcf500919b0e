use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct SkillData {
    pub name: String,
    /// 0–100 self-assessed proficiency, rendered as a bar in the admin UI.
    pub level: i16,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResult {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub level: i16,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    /// Unique (owner, lower(name)) index violated.
    #[error("Skill already exists")]
    NameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<SkillResult>, SkillRepositoryError>;

    async fn find_for_owner(
        &self,
        owner: UserId,
        skill_id: Uuid,
    ) -> Result<Option<SkillResult>, SkillRepositoryError>;

    async fn insert(
        &self,
        owner: UserId,
        data: SkillData,
    ) -> Result<SkillResult, SkillRepositoryError>;

    async fn update(
        &self,
        owner: UserId,
        skill_id: Uuid,
        data: SkillData,
    ) -> Result<SkillResult, SkillRepositoryError>;

    async fn delete(&self, owner: UserId, skill_id: Uuid) -> Result<(), SkillRepositoryError>;
}
