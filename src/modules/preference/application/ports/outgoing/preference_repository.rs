use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

/// Closed theme set; stored as its lowercase tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceData {
    pub theme: Theme,
    pub accent_color: Option<String>,
    pub show_email: bool,
    pub newsletter: bool,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceResult {
    pub id: Uuid,
    pub owner: UserId,
    pub theme: Theme,
    pub accent_color: Option<String>,
    pub show_email: bool,
    pub newsletter: bool,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Another user's matchable preference fields, username included for the
/// similar-users listing.
#[derive(Debug, Clone)]
pub struct PeerPreferences {
    pub user_id: Uuid,
    pub username: String,
    pub theme: Theme,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PreferenceRepositoryError {
    #[error("Preferences not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn find_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<PreferenceResult>, PreferenceRepositoryError>;

    /// Creates the row on first write, replaces it afterwards.
    async fn upsert(
        &self,
        owner: UserId,
        data: PreferenceData,
    ) -> Result<PreferenceResult, PreferenceRepositoryError>;

    /// Everyone else's matchable preferences.
    async fn list_peers(
        &self,
        exclude: UserId,
    ) -> Result<Vec<PeerPreferences>, PreferenceRepositoryError>;
}
