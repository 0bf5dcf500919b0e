// src/modules/catalog/application/ports/outgoing/item_store.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Records (storage-level view of a categorized item)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Variant tag within the family, e.g. `award`.
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    /// Tagged details payload as serialized by the domain enum.
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewItemRecord {
    pub owner_id: Uuid,
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub details: serde_json::Value,
}

/// Full-replace update; a changed `category` moves the item between
/// sub-collections.
#[derive(Debug, Clone)]
pub struct ItemRecordChanges {
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub details: serde_json::Value,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ItemStoreError {
    /// Item doesn't exist OR doesn't belong to the owner.
    #[error("Item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// One store serves all four item families; `family` is the storage
/// discriminator (`Category::FAMILY`). Listing order is insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(
        &self,
        family: &'static str,
        owner: Uuid,
    ) -> Result<Vec<ItemRecord>, ItemStoreError>;

    async fn list_by_category(
        &self,
        family: &'static str,
        owner: Uuid,
        category: &str,
    ) -> Result<Vec<ItemRecord>, ItemStoreError>;

    async fn find_by_id(
        &self,
        family: &'static str,
        owner: Uuid,
        id: Uuid,
    ) -> Result<Option<ItemRecord>, ItemStoreError>;

    /// Returns the inserted record, id issued by the store.
    async fn insert(
        &self,
        family: &'static str,
        item: NewItemRecord,
    ) -> Result<ItemRecord, ItemStoreError>;

    async fn update(
        &self,
        family: &'static str,
        owner: Uuid,
        id: Uuid,
        changes: ItemRecordChanges,
    ) -> Result<ItemRecord, ItemStoreError>;

    async fn delete(
        &self,
        family: &'static str,
        owner: Uuid,
        id: Uuid,
    ) -> Result<(), ItemStoreError>;
}
