use std::fmt;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum ResolveUserIdError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ResolveUserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveUserIdError::NotFound => write!(f, "User not found"),
            ResolveUserIdError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

/// Maps a public username (e.g. in `/api/public/{username}/...` routes)
/// to the owner id the repositories filter by.
#[derive(Clone)]
pub struct UserIdentityResolver {
    query: Arc<dyn UserQuery>,
}

impl UserIdentityResolver {
    pub fn new(query: Arc<dyn UserQuery>) -> Self {
        Self { query }
    }

    pub async fn by_username(&self, username: &str) -> Result<UserId, ResolveUserIdError> {
        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| ResolveUserIdError::RepositoryError(e.to_string()))?
            .ok_or(ResolveUserIdError::NotFound)?;

        Ok(UserId::from(user.id))
    }
}
