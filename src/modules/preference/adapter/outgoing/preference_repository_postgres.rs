use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::preferences::{ActiveModel, Column, Entity, Model};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::preference::application::ports::outgoing::{
    PeerPreferences, PreferenceData, PreferenceRepository, PreferenceRepositoryError,
    PreferenceResult, Theme,
};

#[derive(Clone)]
pub struct PreferenceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PreferenceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn parse_theme(raw: &str, id: Uuid) -> Result<Theme, PreferenceRepositoryError> {
    Theme::parse(raw).ok_or_else(|| {
        PreferenceRepositoryError::SerializationError(format!(
            "corrupt theme `{}` for preferences {}",
            raw, id
        ))
    })
}

fn parse_interests(
    value: &serde_json::Value,
) -> Result<Vec<String>, PreferenceRepositoryError> {
    serde_json::from_value(value.clone())
        .map_err(|e| PreferenceRepositoryError::SerializationError(e.to_string()))
}

fn model_to_result(model: Model) -> Result<PreferenceResult, PreferenceRepositoryError> {
    Ok(PreferenceResult {
        id: model.id,
        owner: UserId::from(model.owner_id),
        theme: parse_theme(&model.theme, model.id)?,
        accent_color: model.accent_color,
        show_email: model.show_email,
        newsletter: model.newsletter,
        interests: parse_interests(&model.interests)?,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    })
}

fn map_db_err(e: DbErr) -> PreferenceRepositoryError {
    PreferenceRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PreferenceRepository for PreferenceRepositoryPostgres {
    async fn find_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<PreferenceResult>, PreferenceRepositoryError> {
        let model = Entity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(model_to_result).transpose()
    }

    async fn upsert(
        &self,
        owner: UserId,
        data: PreferenceData,
    ) -> Result<PreferenceResult, PreferenceRepositoryError> {
        let interests = serde_json::to_value(&data.interests)
            .map_err(|e| PreferenceRepositoryError::SerializationError(e.to_string()))?;

        let existing = Entity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let saved = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.theme = Set(data.theme.as_str().to_string());
                active.accent_color = Set(data.accent_color);
                active.show_email = Set(data.show_email);
                active.newsletter = Set(data.newsletter);
                active.interests = Set(interests);
                active.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                let now = Utc::now().fixed_offset();
                let active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    owner_id: Set(owner.value()),
                    theme: Set(data.theme.as_str().to_string()),
                    accent_color: Set(data.accent_color),
                    show_email: Set(data.show_email),
                    newsletter: Set(data.newsletter),
                    interests: Set(interests),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                active.insert(&*self.db).await.map_err(map_db_err)?
            }
        };

        model_to_result(saved)
    }

    async fn list_peers(
        &self,
        exclude: UserId,
    ) -> Result<Vec<PeerPreferences>, PreferenceRepositoryError> {
        let rows = Entity::find()
            .filter(Column::OwnerId.ne(exclude.value()))
            .find_also_related(
                crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity,
            )
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut peers = Vec::with_capacity(rows.len());
        for (model, user) in rows {
            // Owner row is FK-guaranteed; a missing join row means the user
            // vanished mid-query, skip it
            let Some(user) = user else { continue };

            peers.push(PeerPreferences {
                user_id: model.owner_id,
                username: user.username,
                theme: parse_theme(&model.theme, model.id)?,
                interests: parse_interests(&model.interests)?,
            });
        }

        Ok(peers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(owner: Uuid) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            owner_id: owner,
            theme: "dark".to_string(),
            accent_color: Some("#112233".to_string()),
            show_email: false,
            newsletter: true,
            interests: serde_json::json!(["rust", "wasm"]),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_for_owner_maps_model() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_model(owner)]])
            .into_connection();

        let repo = PreferenceRepositoryPostgres::new(Arc::new(db));
        let prefs = repo
            .find_for_owner(UserId::from(owner))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.interests, vec!["rust", "wasm"]);
    }

    #[tokio::test]
    async fn test_find_for_owner_absent_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let repo = PreferenceRepositoryPostgres::new(Arc::new(db));
        let prefs = repo.find_for_owner(UserId::from(Uuid::new_v4())).await.unwrap();

        assert!(prefs.is_none());
    }
}
