use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::education_entries::{ActiveModel, Column, Entity, Model};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::education::application::ports::outgoing::{
    EducationData, EducationRepository, EducationRepositoryError, EducationResult,
};

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_result(model: Model) -> EducationResult {
    EducationResult {
        id: model.id,
        owner: UserId::from(model.owner_id),
        school: model.school,
        degree: model.degree,
        field_of_study: model.field_of_study,
        start_year: model.start_year,
        end_year: model.end_year,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<EducationResult>, EducationRepositoryError> {
        let models = Entity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .order_by_desc(Column::StartYear)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn find_for_owner(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<Option<EducationResult>, EducationRepositoryError> {
        let model = Entity::find_by_id(entry_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_result))
    }

    async fn insert(
        &self,
        owner: UserId,
        data: EducationData,
    ) -> Result<EducationResult, EducationRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner.value()),
            school: Set(data.school),
            degree: Set(data.degree),
            field_of_study: Set(data.field_of_study),
            start_year: Set(data.start_year),
            end_year: Set(data.end_year),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(inserted))
    }

    async fn update(
        &self,
        owner: UserId,
        entry_id: Uuid,
        data: EducationData,
    ) -> Result<EducationResult, EducationRepositoryError> {
        let existing = Entity::find_by_id(entry_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EducationRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.school = Set(data.school);
        model.degree = Set(data.degree);
        model.field_of_study = Set(data.field_of_study);
        model.start_year = Set(data.start_year);
        model.end_year = Set(data.end_year);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(updated))
    }

    async fn delete(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::OwnerId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }

        Ok(())
    }
}
