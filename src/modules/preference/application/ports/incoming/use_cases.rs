use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::preference::application::matching::SimilarUser;
use crate::modules::preference::application::ports::outgoing::{
    PreferenceData, PreferenceResult, Theme,
};
use crate::shared::validation::is_hex_color;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

const MAX_INTERESTS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceCommandError {
    UnknownTheme(String),
    InvalidAccentColor,
    TooManyInterests,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for PreferenceCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceCommandError::UnknownTheme(given) => {
                write!(f, "Unknown theme `{}` (expected light|dark|system)", given)
            }
            PreferenceCommandError::InvalidAccentColor => {
                write!(f, "Accent color must be a `#RRGGBB` value")
            }
            PreferenceCommandError::TooManyInterests => {
                write!(f, "At most {} interests are allowed", MAX_INTERESTS)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceCommand(PreferenceData);

impl PreferenceCommand {
    pub fn new(
        theme: String,
        accent_color: Option<String>,
        show_email: bool,
        newsletter: bool,
        interests: Vec<String>,
    ) -> Result<Self, PreferenceCommandError> {
        let theme =
            Theme::parse(&theme).ok_or(PreferenceCommandError::UnknownTheme(theme.clone()))?;

        let accent_color = accent_color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if let Some(color) = accent_color.as_deref() {
            if !is_hex_color(color) {
                return Err(PreferenceCommandError::InvalidAccentColor);
            }
        }

        // Lowercased, deduplicated, insertion order kept
        let mut interests_clean: Vec<String> = Vec::new();
        for interest in interests {
            let interest = interest.trim().to_lowercase();
            if !interest.is_empty() && !interests_clean.contains(&interest) {
                interests_clean.push(interest);
            }
        }
        if interests_clean.len() > MAX_INTERESTS {
            return Err(PreferenceCommandError::TooManyInterests);
        }

        Ok(Self(PreferenceData {
            theme,
            accent_color,
            show_email,
            newsletter,
            interests: interests_clean,
        }))
    }

    pub fn into_data(self) -> PreferenceData {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum GetPreferencesError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetPreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetPreferencesError::NotFound => write!(f, "preferences not found"),
            GetPreferencesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetPreferencesUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<PreferenceResult, GetPreferencesError>;
}

#[derive(Debug, Clone)]
pub enum UpsertPreferencesError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpsertPreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertPreferencesError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpsertPreferencesUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: PreferenceCommand,
    ) -> Result<PreferenceResult, UpsertPreferencesError>;
}

#[derive(Debug, Clone)]
pub enum FindSimilarUsersError {
    /// Caller has never saved preferences; nothing to match against.
    PreferencesNotSet,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for FindSimilarUsersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindSimilarUsersError::PreferencesNotSet => write!(f, "preferences not set"),
            FindSimilarUsersError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait FindSimilarUsersUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<SimilarUser>, FindSimilarUsersError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_rejects_unknown_theme() {
        let result = PreferenceCommand::new("sepia".to_string(), None, false, false, vec![]);
        assert!(matches!(
            result,
            Err(PreferenceCommandError::UnknownTheme(given)) if given == "sepia"
        ));
    }

    #[test]
    fn test_command_rejects_bad_accent_color() {
        let result = PreferenceCommand::new(
            "dark".to_string(),
            Some("red".to_string()),
            false,
            false,
            vec![],
        );
        assert_eq!(
            result.unwrap_err(),
            PreferenceCommandError::InvalidAccentColor
        );
    }

    #[test]
    fn test_command_dedupes_interests() {
        let data = PreferenceCommand::new(
            "dark".to_string(),
            Some("#AABB00".to_string()),
            true,
            false,
            vec![
                "Rust".to_string(),
                "rust ".to_string(),
                "wasm".to_string(),
                " ".to_string(),
            ],
        )
        .unwrap()
        .into_data();

        assert_eq!(data.interests, vec!["rust", "wasm"]);
        assert_eq!(data.theme, Theme::Dark);
    }
}
