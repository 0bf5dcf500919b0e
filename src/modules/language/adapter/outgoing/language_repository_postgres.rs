use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::languages::{ActiveModel, Column, Entity, Model};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::language::application::ports::outgoing::{
    LanguageData, LanguageRepository, LanguageRepositoryError, LanguageResult, Proficiency,
};

#[derive(Clone)]
pub struct LanguageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LanguageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_result(model: Model) -> Result<LanguageResult, LanguageRepositoryError> {
    let proficiency = Proficiency::parse(&model.proficiency).ok_or_else(|| {
        LanguageRepositoryError::DatabaseError(format!(
            "corrupt proficiency `{}` for language {}",
            model.proficiency, model.id
        ))
    })?;

    Ok(LanguageResult {
        id: model.id,
        owner: UserId::from(model.owner_id),
        name: model.name,
        proficiency,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    })
}

fn map_db_err(e: DbErr) -> LanguageRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate key") || msg.contains("idx_languages_owner_name_unique") {
        LanguageRepositoryError::NameAlreadyExists
    } else {
        LanguageRepositoryError::DatabaseError(msg)
    }
}

#[async_trait]
impl LanguageRepository for LanguageRepositoryPostgres {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<LanguageResult>, LanguageRepositoryError> {
        let models = Entity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_result).collect()
    }

    async fn find_for_owner(
        &self,
        owner: UserId,
        language_id: Uuid,
    ) -> Result<Option<LanguageResult>, LanguageRepositoryError> {
        let model = Entity::find_by_id(language_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(model_to_result).transpose()
    }

    async fn insert(
        &self,
        owner: UserId,
        data: LanguageData,
    ) -> Result<LanguageResult, LanguageRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner.value()),
            name: Set(data.name),
            proficiency: Set(data.proficiency.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_result(inserted)
    }

    async fn update(
        &self,
        owner: UserId,
        language_id: Uuid,
        data: LanguageData,
    ) -> Result<LanguageResult, LanguageRepositoryError> {
        let existing = Entity::find_by_id(language_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(LanguageRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.name = Set(data.name);
        model.proficiency = Set(data.proficiency.as_str().to_string());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        model_to_result(updated)
    }

    async fn delete(
        &self,
        owner: UserId,
        language_id: Uuid,
    ) -> Result<(), LanguageRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(language_id))
            .filter(Column::OwnerId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(LanguageRepositoryError::NotFound);
        }

        Ok(())
    }
}
