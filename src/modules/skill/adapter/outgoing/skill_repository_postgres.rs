use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::skills::{ActiveModel, Column, Entity, Model};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::skill::application::ports::outgoing::{
    SkillData, SkillRepository, SkillRepositoryError, SkillResult,
};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_result(model: Model) -> SkillResult {
    SkillResult {
        id: model.id,
        owner: UserId::from(model.owner_id),
        name: model.name,
        level: model.level,
        category: model.category,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate key") || msg.contains("idx_skills_owner_name_unique") {
        SkillRepositoryError::NameAlreadyExists
    } else {
        SkillRepositoryError::DatabaseError(msg)
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<SkillResult>, SkillRepositoryError> {
        let models = Entity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .order_by_desc(Column::Level)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn find_for_owner(
        &self,
        owner: UserId,
        skill_id: Uuid,
    ) -> Result<Option<SkillResult>, SkillRepositoryError> {
        let model = Entity::find_by_id(skill_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_result))
    }

    async fn insert(
        &self,
        owner: UserId,
        data: SkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner.value()),
            name: Set(data.name),
            level: Set(data.level),
            category: Set(data.category),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(inserted))
    }

    async fn update(
        &self,
        owner: UserId,
        skill_id: Uuid,
        data: SkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let existing = Entity::find_by_id(skill_id)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.name = Set(data.name);
        model.level = Set(data.level);
        model.category = Set(data.category);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(updated))
    }

    async fn delete(&self, owner: UserId, skill_id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(skill_id))
            .filter(Column::OwnerId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}
