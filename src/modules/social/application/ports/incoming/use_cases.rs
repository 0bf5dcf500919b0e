use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::outgoing::{SocialLinkData, SocialLinkResult};
use crate::shared::validation::is_http_url;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum SocialLinkCommandError {
    EmptyPlatform,
    PlatformTooLong,
    InvalidUrl,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for SocialLinkCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialLinkCommandError::EmptyPlatform => write!(f, "Platform cannot be empty"),
            SocialLinkCommandError::PlatformTooLong => {
                write!(f, "Platform must not exceed 50 characters")
            }
            SocialLinkCommandError::InvalidUrl => {
                write!(f, "Field `url` must be a valid http(s) URL")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SocialLinkCommand(SocialLinkData);

impl SocialLinkCommand {
    pub fn new(
        platform: String,
        url: String,
        label: Option<String>,
    ) -> Result<Self, SocialLinkCommandError> {
        let platform = platform.trim().to_string();
        if platform.is_empty() {
            return Err(SocialLinkCommandError::EmptyPlatform);
        }
        if platform.len() > 50 {
            return Err(SocialLinkCommandError::PlatformTooLong);
        }

        let url = url.trim().to_string();
        if !is_http_url(&url) {
            return Err(SocialLinkCommandError::InvalidUrl);
        }

        Ok(Self(SocialLinkData {
            platform,
            url,
            label: label.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()),
        }))
    }

    pub fn into_data(self) -> SocialLinkData {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ListSocialLinksError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListSocialLinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSocialLinksError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListSocialLinksUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<SocialLinkResult>, ListSocialLinksError>;
}

#[derive(Debug, Clone)]
pub enum CreateSocialLinkError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for CreateSocialLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateSocialLinkError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait CreateSocialLinkUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: SocialLinkCommand,
    ) -> Result<SocialLinkResult, CreateSocialLinkError>;
}

#[derive(Debug, Clone)]
pub enum GetSocialLinkError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetSocialLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSocialLinkError::NotFound => write!(f, "social link not found"),
            GetSocialLinkError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetSocialLinkUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        link_id: Uuid,
    ) -> Result<SocialLinkResult, GetSocialLinkError>;
}

#[derive(Debug, Clone)]
pub enum UpdateSocialLinkError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateSocialLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSocialLinkError::NotFound => write!(f, "social link not found"),
            UpdateSocialLinkError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateSocialLinkUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        link_id: Uuid,
        command: SocialLinkCommand,
    ) -> Result<SocialLinkResult, UpdateSocialLinkError>;
}

#[derive(Debug, Clone)]
pub enum DeleteSocialLinkError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for DeleteSocialLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteSocialLinkError::NotFound => write!(f, "social link not found"),
            DeleteSocialLinkError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteSocialLinkUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, link_id: Uuid) -> Result<(), DeleteSocialLinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_requires_valid_url() {
        assert_eq!(
            SocialLinkCommand::new(
                "github".to_string(),
                "github.com/jane".to_string(),
                None
            )
            .unwrap_err(),
            SocialLinkCommandError::InvalidUrl
        );

        let data = SocialLinkCommand::new(
            "github".to_string(),
            "https://github.com/jane".to_string(),
            Some("  ".to_string()),
        )
        .unwrap()
        .into_data();
        assert_eq!(data.url, "https://github.com/jane");
        assert!(data.label.is_none());
    }
}
