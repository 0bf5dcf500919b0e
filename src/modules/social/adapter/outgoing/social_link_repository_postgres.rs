use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::social_links::{ActiveModel, Column, Entity, Model};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::outgoing::{
    SocialLinkData, SocialLinkRepository, SocialLinkRepositoryError, SocialLinkResult,
};

#[derive(Clone)]
pub struct SocialLinkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialLinkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_result(model: Model) -> SocialLinkResult {
    SocialLinkResult {
        id: model.id,
        owner: UserId::from(model.owner_id),
        platform: model.platform,
        url: model.url,
        label: model.label,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

fn map_db_err(e: DbErr) -> SocialLinkRepositoryError {
    SocialLinkRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SocialLinkRepository for SocialLinkRepositoryPostgres {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<SocialLinkResult>, SocialLinkRepositoryError> {
        let models = Entity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .order_by_asc(Column::Platform)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn find_for_owner(
        &self,
        owner: UserId,
        link_id: Uuid,
    ) -> Result<Option<SocialLinkResult>, SocialLinkRepositoryError> {
        let model = Entity::find_by_id(link_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_result))
    }

    async fn insert(
        &self,
        owner: UserId,
        data: SocialLinkData,
    ) -> Result<SocialLinkResult, SocialLinkRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner.value()),
            platform: Set(data.platform),
            url: Set(data.url),
            label: Set(data.label),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(inserted))
    }

    async fn update(
        &self,
        owner: UserId,
        link_id: Uuid,
        data: SocialLinkData,
    ) -> Result<SocialLinkResult, SocialLinkRepositoryError> {
        let existing = Entity::find_by_id(link_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SocialLinkRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.platform = Set(data.platform);
        model.url = Set(data.url);
        model.label = Set(data.label);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(updated))
    }

    async fn delete(
        &self,
        owner: UserId,
        link_id: Uuid,
    ) -> Result<(), SocialLinkRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(link_id))
            .filter(Column::OwnerId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SocialLinkRepositoryError::NotFound);
        }

        Ok(())
    }
}
