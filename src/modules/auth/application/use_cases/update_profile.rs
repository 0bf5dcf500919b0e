use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::ProfileChanges;
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::shared::validation::is_http_url;

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    NotFound,
    InvalidFullName(String),
    InvalidUrl(&'static str),
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileError::NotFound => write!(f, "User not found"),
            UpdateProfileError::InvalidFullName(msg) => write!(f, "{}", msg),
            UpdateProfileError::InvalidUrl(field) => {
                write!(f, "Field `{}` must be a valid http(s) URL", field)
            }
            UpdateProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, UpdateProfileError>;
}

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate(changes: &ProfileChanges) -> Result<(), UpdateProfileError> {
    if let Some(name) = &changes.full_name {
        let name = name.trim();
        if name.is_empty() || name.len() > 100 {
            return Err(UpdateProfileError::InvalidFullName(
                "Full name must be between 1 and 100 characters".to_string(),
            ));
        }
    }
    if let Some(url) = changes.avatar_url.as_deref().filter(|u| !u.is_empty()) {
        if !is_http_url(url) {
            return Err(UpdateProfileError::InvalidUrl("avatar_url"));
        }
    }
    if let Some(url) = changes.website_url.as_deref().filter(|u| !u.is_empty()) {
        if !is_http_url(url) {
            return Err(UpdateProfileError::InvalidUrl("website_url"));
        }
    }
    Ok(())
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, UpdateProfileError> {
        validate(&changes)?;

        self.repository
            .update_profile(user_id, changes)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::NotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
