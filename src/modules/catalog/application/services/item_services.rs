use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateItemError, CreateItemUseCase, DeleteItemError, DeleteItemUseCase, GetItemError,
    GetItemUseCase, ListItemsByCategoryError, ListItemsByCategoryUseCase, ListItemsError,
    ListItemsUseCase, UpdateItemError, UpdateItemInput, UpdateItemUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    ItemRecord, ItemRecordChanges, ItemStore, ItemStoreError, NewItemRecord,
};
use crate::modules::catalog::domain::category::Category;
use crate::modules::catalog::domain::item::{
    CatalogFamily, CatalogItem, GroupedItems, ItemDraft, ItemValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Record <-> item conversion
// ──────────────────────────────────────────────────────────
//

fn record_to_item<F: CatalogFamily>(record: ItemRecord) -> Result<CatalogItem<F>, String> {
    let details: F::Details = serde_json::from_value(record.details)
        .map_err(|e| format!("corrupt details for item {}: {}", record.id, e))?;

    Ok(CatalogItem {
        id: record.id,
        owner: UserId::from(record.owner_id),
        name: record.name,
        description: record.description,
        date: record.event_date,
        details,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

/// Assembles the storage payload for a validated draft. The details enum
/// carries the category tag, so storage can never disagree with the
/// variant.
fn storage_fields<F: CatalogFamily>(
    category: F::Category,
    draft: &ItemDraft,
    details: &F::Details,
) -> Result<(String, String, Option<String>, serde_json::Value), ItemValidationError> {
    let name = draft
        .display_name()
        .ok_or(ItemValidationError::MissingField("name"))?;
    let details_json = serde_json::to_value(details).map_err(|_| {
        ItemValidationError::InvalidValue {
            field: "category",
            reason: "details not serializable".to_string(),
        }
    })?;
    Ok((
        category.tag().to_string(),
        name,
        draft.description(),
        details_json,
    ))
}

//
// ──────────────────────────────────────────────────────────
// List whole family
// ──────────────────────────────────────────────────────────
//

pub struct ListItemsService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    store: S,
    _family: PhantomData<F>,
}

impl<F, S> ListItemsService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _family: PhantomData,
        }
    }
}

#[async_trait]
impl<F, S> ListItemsUseCase<F> for ListItemsService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    async fn execute(&self, owner: UserId) -> Result<GroupedItems<F>, ListItemsError> {
        let records = self
            .store
            .list(F::NAME, owner.value())
            .await
            .map_err(|e| ListItemsError::RepositoryError(e.to_string()))?;

        let items = records
            .into_iter()
            .map(record_to_item::<F>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ListItemsError::RepositoryError)?;

        Ok(GroupedItems::new(items))
    }
}

//
// ──────────────────────────────────────────────────────────
// List one sub-collection
// ──────────────────────────────────────────────────────────
//

pub struct ListItemsByCategoryService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    store: S,
    _family: PhantomData<F>,
}

impl<F, S> ListItemsByCategoryService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _family: PhantomData,
        }
    }
}

#[async_trait]
impl<F, S> ListItemsByCategoryUseCase<F> for ListItemsByCategoryService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    async fn execute(
        &self,
        owner: UserId,
        category: &str,
    ) -> Result<Vec<CatalogItem<F>>, ListItemsByCategoryError> {
        let category = F::Category::parse(category)
            .map_err(ListItemsByCategoryError::UnknownCategory)?;

        let records = self
            .store
            .list_by_category(F::NAME, owner.value(), category.tag())
            .await
            .map_err(|e| ListItemsByCategoryError::RepositoryError(e.to_string()))?;

        records
            .into_iter()
            .map(record_to_item::<F>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ListItemsByCategoryError::RepositoryError)
    }
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

pub struct CreateItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    store: S,
    _family: PhantomData<F>,
}

impl<F, S> CreateItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _family: PhantomData,
        }
    }
}

#[async_trait]
impl<F, S> CreateItemUseCase<F> for CreateItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    async fn execute(
        &self,
        owner: UserId,
        category: &str,
        draft: ItemDraft,
    ) -> Result<CatalogItem<F>, CreateItemError> {
        let category =
            F::Category::parse(category).map_err(CreateItemError::UnknownCategory)?;

        let details =
            F::build_details(category, &draft).map_err(CreateItemError::Validation)?;
        let (category_tag, name, description, details_json) =
            storage_fields::<F>(category, &draft, &details).map_err(CreateItemError::Validation)?;

        let record = self
            .store
            .insert(
                F::NAME,
                NewItemRecord {
                    owner_id: owner.value(),
                    category: category_tag,
                    name,
                    description,
                    event_date: draft.date,
                    details: details_json,
                },
            )
            .await
            .map_err(|e| CreateItemError::RepositoryError(e.to_string()))?;

        record_to_item::<F>(record).map_err(CreateItemError::RepositoryError)
    }
}

//
// ──────────────────────────────────────────────────────────
// Get by id
// ──────────────────────────────────────────────────────────
//

pub struct GetItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    store: S,
    _family: PhantomData<F>,
}

impl<F, S> GetItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _family: PhantomData,
        }
    }
}

#[async_trait]
impl<F, S> GetItemUseCase<F> for GetItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<CatalogItem<F>, GetItemError> {
        let record = self
            .store
            .find_by_id(F::NAME, owner.value(), id)
            .await
            .map_err(|e| GetItemError::RepositoryError(e.to_string()))?
            .ok_or(GetItemError::NotFound)?;

        record_to_item::<F>(record).map_err(GetItemError::RepositoryError)
    }
}

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//

pub struct UpdateItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    store: S,
    _family: PhantomData<F>,
}

impl<F, S> UpdateItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _family: PhantomData,
        }
    }
}

#[async_trait]
impl<F, S> UpdateItemUseCase<F> for UpdateItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        input: UpdateItemInput,
    ) -> Result<CatalogItem<F>, UpdateItemError> {
        let existing = self
            .store
            .find_by_id(F::NAME, owner.value(), id)
            .await
            .map_err(|e| UpdateItemError::RepositoryError(e.to_string()))?
            .ok_or(UpdateItemError::NotFound)?;

        // Absent category keeps the stored one; a different tag moves the
        // item between sub-collections.
        let category = match input.category.as_deref() {
            Some(tag) => F::Category::parse(tag).map_err(UpdateItemError::UnknownCategory)?,
            None => F::Category::parse(&existing.category)
                .map_err(|e| UpdateItemError::RepositoryError(e.to_string()))?,
        };

        let details =
            F::build_details(category, &input.draft).map_err(UpdateItemError::Validation)?;
        let (category_tag, name, description, details_json) =
            storage_fields::<F>(category, &input.draft, &details)
                .map_err(UpdateItemError::Validation)?;

        let updated = self
            .store
            .update(
                F::NAME,
                owner.value(),
                id,
                ItemRecordChanges {
                    category: category_tag,
                    name,
                    description,
                    event_date: input.draft.date,
                    details: details_json,
                },
            )
            .await
            .map_err(|e| match e {
                ItemStoreError::NotFound => UpdateItemError::NotFound,
                other => UpdateItemError::RepositoryError(other.to_string()),
            })?;

        record_to_item::<F>(updated).map_err(UpdateItemError::RepositoryError)
    }
}

//
// ──────────────────────────────────────────────────────────
// Delete
// ──────────────────────────────────────────────────────────
//

pub struct DeleteItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    store: S,
    _family: PhantomData<F>,
}

impl<F, S> DeleteItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _family: PhantomData,
        }
    }
}

#[async_trait]
impl<F, S> DeleteItemUseCase<F> for DeleteItemService<F, S>
where
    F: CatalogFamily,
    S: ItemStore,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteItemError> {
        self.store
            .delete(F::NAME, owner.value(), id)
            .await
            .map_err(|e| match e {
                ItemStoreError::NotFound => DeleteItemError::NotFound,
                other => DeleteItemError::RepositoryError(other.to_string()),
            })
    }
}
