use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel, Entity as UserEntity, Model as UserModel};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    NewUser, ProfileChanges, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_user(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        full_name: model.full_name,
        headline: model.headline,
        bio: model.bio,
        location: model.location,
        avatar_url: model.avatar_url,
        website_url: model.website_url,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

fn map_insert_error(e: sea_orm::DbErr) -> UserRepositoryError {
    let msg = e.to_string();
    // Unique index on username/email
    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        UserRepositoryError::UserAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(msg)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            full_name: Set(user.full_name),
            headline: Set(None),
            bio: Set(None),
            location: Set(None),
            avatar_url: Set(None),
            website_url: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_error)?;

        Ok(model_to_user(inserted))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let existing = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut model: ActiveModel = existing.into();

        if let Some(full_name) = changes.full_name {
            model.full_name = Set(full_name.trim().to_string());
        }
        if let Some(headline) = changes.headline {
            model.headline = Set(Some(headline).filter(|v| !v.is_empty()));
        }
        if let Some(bio) = changes.bio {
            model.bio = Set(Some(bio).filter(|v| !v.is_empty()));
        }
        if let Some(location) = changes.location {
            model.location = Set(Some(location).filter(|v| !v.is_empty()));
        }
        if let Some(avatar_url) = changes.avatar_url {
            model.avatar_url = Set(Some(avatar_url).filter(|v| !v.is_empty()));
        }
        if let Some(website_url) = changes.website_url {
            model.website_url = Set(Some(website_url).filter(|v| !v.is_empty()));
        }

        let updated = model
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_user(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(id: Uuid) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Jane".to_string(),
            headline: None,
            bio: None,
            location: None,
            avatar_url: None,
            website_url: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_create_user_returns_inserted_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_model(id)]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo
            .create_user(NewUser {
                username: "jane".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "hash".to_string(),
                full_name: "Jane".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.username, "jane");
    }

    #[tokio::test]
    async fn test_update_profile_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<UserModel>::new()])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_profile(Uuid::new_v4(), ProfileChanges::default())
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }
}
