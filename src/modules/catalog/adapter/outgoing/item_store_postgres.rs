use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::catalog_items::{
    ActiveModel, Column, Entity as CatalogItemEntity, Model as CatalogItemModel,
};
use crate::modules::catalog::application::ports::outgoing::{
    ItemRecord, ItemRecordChanges, ItemStore, ItemStoreError, NewItemRecord,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct ItemStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ItemStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: CatalogItemModel) -> ItemRecord {
    ItemRecord {
        id: model.id,
        owner_id: model.owner_id,
        category: model.category,
        name: model.name,
        description: model.description,
        event_date: model.event_date,
        details: model.details,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ItemStoreError {
    ItemStoreError::DatabaseError(e.to_string())
}

#[async_trait]
impl ItemStore for ItemStorePostgres {
    async fn list(
        &self,
        family: &'static str,
        owner: Uuid,
    ) -> Result<Vec<ItemRecord>, ItemStoreError> {
        let models = CatalogItemEntity::find()
            .filter(Column::Domain.eq(family))
            .filter(Column::OwnerId.eq(owner))
            // Sub-collections keep insertion order
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn list_by_category(
        &self,
        family: &'static str,
        owner: Uuid,
        category: &str,
    ) -> Result<Vec<ItemRecord>, ItemStoreError> {
        let models = CatalogItemEntity::find()
            .filter(Column::Domain.eq(family))
            .filter(Column::OwnerId.eq(owner))
            .filter(Column::Category.eq(category))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn find_by_id(
        &self,
        family: &'static str,
        owner: Uuid,
        id: Uuid,
    ) -> Result<Option<ItemRecord>, ItemStoreError> {
        let model = CatalogItemEntity::find_by_id(id)
            .filter(Column::Domain.eq(family))
            .filter(Column::OwnerId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_record))
    }

    async fn insert(
        &self,
        family: &'static str,
        item: NewItemRecord,
    ) -> Result<ItemRecord, ItemStoreError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(item.owner_id),
            domain: Set(family.to_string()),
            category: Set(item.category),
            name: Set(item.name),
            description: Set(item.description),
            event_date: Set(item.event_date),
            details: Set(item.details),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(inserted))
    }

    async fn update(
        &self,
        family: &'static str,
        owner: Uuid,
        id: Uuid,
        changes: ItemRecordChanges,
    ) -> Result<ItemRecord, ItemStoreError> {
        let existing = CatalogItemEntity::find_by_id(id)
            .filter(Column::Domain.eq(family))
            .filter(Column::OwnerId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ItemStoreError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.category = Set(changes.category);
        model.name = Set(changes.name);
        model.description = Set(changes.description);
        model.event_date = Set(changes.event_date);
        model.details = Set(changes.details);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(updated))
    }

    async fn delete(
        &self,
        family: &'static str,
        owner: Uuid,
        id: Uuid,
    ) -> Result<(), ItemStoreError> {
        let result = CatalogItemEntity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::Domain.eq(family))
            .filter(Column::OwnerId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ItemStoreError::NotFound);
        }

        Ok(())
    }
}
