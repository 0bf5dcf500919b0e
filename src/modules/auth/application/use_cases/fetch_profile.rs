use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchProfileError::NotFound => write!(f, "User not found"),
            FetchProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError>;
}

pub struct FetchProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::user_query::UserQueryError;
    use chrono::Utc;

    struct MockQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_fetch_profile_found() {
        let user = User {
            id: Uuid::new_v4(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "h".to_string(),
            full_name: "Jane".to_string(),
            headline: Some("Engineer".to_string()),
            bio: None,
            location: None,
            avatar_url: None,
            website_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let service = FetchProfileService::new(MockQuery {
            user: Some(user.clone()),
        });

        let result = service.execute(user.id).await.unwrap();
        assert_eq!(result.username, "jane");
    }

    #[tokio::test]
    async fn test_fetch_profile_missing() {
        let service = FetchProfileService::new(MockQuery { user: None });
        let result = service.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(FetchProfileError::NotFound)));
    }
}
