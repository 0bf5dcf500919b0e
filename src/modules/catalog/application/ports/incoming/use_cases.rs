use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::domain::category::UnknownCategory;
use crate::modules::catalog::domain::item::{
    CatalogFamily, CatalogItem, GroupedItems, ItemDraft, ItemValidationError,
};

//
// ──────────────────────────────────────────────────────────
// List (whole family, grouped by sub-collection)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ListItemsError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItemsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListItemsUseCase<F: CatalogFamily>: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<GroupedItems<F>, ListItemsError>;
}

//
// ──────────────────────────────────────────────────────────
// List one sub-collection
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ListItemsByCategoryError {
    UnknownCategory(UnknownCategory),
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListItemsByCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItemsByCategoryError::UnknownCategory(e) => write!(f, "{}", e),
            ListItemsByCategoryError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait ListItemsByCategoryUseCase<F: CatalogFamily>: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        category: &str,
    ) -> Result<Vec<CatalogItem<F>>, ListItemsByCategoryError>;
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateItemError {
    UnknownCategory(UnknownCategory),
    Validation(ItemValidationError),
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for CreateItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateItemError::UnknownCategory(e) => write!(f, "{}", e),
            CreateItemError::Validation(e) => write!(f, "{}", e),
            CreateItemError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateItemUseCase<F: CatalogFamily>: Send + Sync {
    /// Creates the item and returns it with its store-issued id.
    async fn execute(
        &self,
        owner: UserId,
        category: &str,
        draft: ItemDraft,
    ) -> Result<CatalogItem<F>, CreateItemError>;
}

//
// ──────────────────────────────────────────────────────────
// Get by id
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum GetItemError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetItemError::NotFound => write!(f, "item not found"),
            GetItemError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetItemUseCase<F: CatalogFamily>: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<CatalogItem<F>, GetItemError>;
}

//
// ──────────────────────────────────────────────────────────
// Update (full replace; category change moves the item)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct UpdateItemInput {
    /// Absent keeps the item's current category.
    pub category: Option<String>,
    pub draft: ItemDraft,
}

#[derive(Debug, Clone)]
pub enum UpdateItemError {
    NotFound,
    UnknownCategory(UnknownCategory),
    Validation(ItemValidationError),
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateItemError::NotFound => write!(f, "item not found"),
            UpdateItemError::UnknownCategory(e) => write!(f, "{}", e),
            UpdateItemError::Validation(e) => write!(f, "{}", e),
            UpdateItemError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateItemUseCase<F: CatalogFamily>: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        input: UpdateItemInput,
    ) -> Result<CatalogItem<F>, UpdateItemError>;
}

//
// ──────────────────────────────────────────────────────────
// Delete
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum DeleteItemError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for DeleteItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteItemError::NotFound => write!(f, "item not found"),
            DeleteItemError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteItemUseCase<F: CatalogFamily>: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteItemError>;
}
