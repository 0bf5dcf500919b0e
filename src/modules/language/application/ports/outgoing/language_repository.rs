use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

/// Closed proficiency scale; stored as its lowercase tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Basic,
    Conversational,
    Fluent,
    Native,
}

impl Proficiency {
    pub fn as_str(self) -> &'static str {
        match self {
            Proficiency::Basic => "basic",
            Proficiency::Conversational => "conversational",
            Proficiency::Fluent => "fluent",
            Proficiency::Native => "native",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "basic" => Some(Proficiency::Basic),
            "conversational" => Some(Proficiency::Conversational),
            "fluent" => Some(Proficiency::Fluent),
            "native" => Some(Proficiency::Native),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageData {
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageResult {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub proficiency: Proficiency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LanguageRepositoryError {
    #[error("Language not found")]
    NotFound,

    #[error("Language already exists")]
    NameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LanguageRepository: Send + Sync {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<LanguageResult>, LanguageRepositoryError>;

    async fn find_for_owner(
        &self,
        owner: UserId,
        language_id: Uuid,
    ) -> Result<Option<LanguageResult>, LanguageRepositoryError>;

    async fn insert(
        &self,
        owner: UserId,
        data: LanguageData,
    ) -> Result<LanguageResult, LanguageRepositoryError>;

    async fn update(
        &self,
        owner: UserId,
        language_id: Uuid,
        data: LanguageData,
    ) -> Result<LanguageResult, LanguageRepositoryError>;

    async fn delete(
        &self,
        owner: UserId,
        language_id: Uuid,
    ) -> Result<(), LanguageRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_parse_round_trip() {
        for p in [
            Proficiency::Basic,
            Proficiency::Conversational,
            Proficiency::Fluent,
            Proficiency::Native,
        ] {
            assert_eq!(Proficiency::parse(p.as_str()), Some(p));
        }
        assert_eq!(Proficiency::parse("expert"), None);
    }
}
