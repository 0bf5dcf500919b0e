pub mod achievements;
pub mod extracurriculars;
pub mod gallery;
pub mod videos;

use actix_web::HttpResponse;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateItemError, DeleteItemError, GetItemError, ListItemsByCategoryError, ListItemsError,
    UpdateItemError, UpdateItemInput,
};
use crate::modules::catalog::domain::item::{CatalogFamily, ItemDraft};
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Request DTO (shared by every family)
// ──────────────────────────────────────────────────────────
//

/// Item body for POST/PUT. `category` (legacy spelling `type`) is optional:
/// the POST path segment always wins, and an absent category on PUT keeps
/// the stored one.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    #[serde(default, alias = "type")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub draft: ItemDraft,
}

//
// ──────────────────────────────────────────────────────────
// Handler cores, generic over the family
// ──────────────────────────────────────────────────────────
//

pub(crate) async fn list_items<F: CatalogFamily>(
    use_cases: &CatalogUseCases<F>,
    user: &AuthenticatedUser,
) -> HttpResponse {
    match use_cases.list.execute(UserId::from(user.user_id)).await {
        Ok(grouped) => ApiResponse::success(grouped),
        Err(ListItemsError::RepositoryError(msg)) => {
            error!(family = F::NAME, "Repository error listing items: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) async fn list_items_by_category<F: CatalogFamily>(
    use_cases: &CatalogUseCases<F>,
    user: &AuthenticatedUser,
    category: &str,
) -> HttpResponse {
    match use_cases
        .list_by_category
        .execute(UserId::from(user.user_id), category)
        .await
    {
        Ok(items) => ApiResponse::list(items),
        Err(ListItemsByCategoryError::UnknownCategory(e)) => {
            ApiResponse::bad_request(&e.to_string())
        }
        Err(ListItemsByCategoryError::RepositoryError(msg)) => {
            error!(
                family = F::NAME,
                "Repository error listing category: {}", msg
            );
            ApiResponse::internal_error()
        }
    }
}

pub(crate) async fn create_item<F: CatalogFamily>(
    use_cases: &CatalogUseCases<F>,
    user: &AuthenticatedUser,
    category: &str,
    payload: ItemPayload,
) -> HttpResponse {
    match use_cases
        .create
        .execute(UserId::from(user.user_id), category, payload.draft)
        .await
    {
        Ok(item) => ApiResponse::created(item),
        Err(CreateItemError::UnknownCategory(e)) => ApiResponse::bad_request(&e.to_string()),
        Err(CreateItemError::Validation(e)) => ApiResponse::bad_request(&e.to_string()),
        Err(CreateItemError::RepositoryError(msg)) => {
            error!(family = F::NAME, "Repository error creating item: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) async fn get_item<F: CatalogFamily>(
    use_cases: &CatalogUseCases<F>,
    user: &AuthenticatedUser,
    id: Uuid,
) -> HttpResponse {
    match use_cases.get.execute(UserId::from(user.user_id), id).await {
        Ok(item) => ApiResponse::success(item),
        Err(GetItemError::NotFound) => ApiResponse::not_found("Item not found"),
        Err(GetItemError::RepositoryError(msg)) => {
            error!(family = F::NAME, "Repository error fetching item: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) async fn update_item<F: CatalogFamily>(
    use_cases: &CatalogUseCases<F>,
    user: &AuthenticatedUser,
    id: Uuid,
    payload: ItemPayload,
) -> HttpResponse {
    let input = UpdateItemInput {
        category: payload.category,
        draft: payload.draft,
    };

    match use_cases
        .update
        .execute(UserId::from(user.user_id), id, input)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(UpdateItemError::NotFound) => ApiResponse::not_found("Item not found"),
        Err(UpdateItemError::UnknownCategory(e)) => ApiResponse::bad_request(&e.to_string()),
        Err(UpdateItemError::Validation(e)) => ApiResponse::bad_request(&e.to_string()),
        Err(UpdateItemError::RepositoryError(msg)) => {
            error!(family = F::NAME, "Repository error updating item: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) async fn delete_item<F: CatalogFamily>(
    use_cases: &CatalogUseCases<F>,
    user: &AuthenticatedUser,
    id: Uuid,
) -> HttpResponse {
    match use_cases
        .delete
        .execute(UserId::from(user.user_id), id)
        .await
    {
        Ok(()) => ApiResponse::message("Item deleted"),
        Err(DeleteItemError::NotFound) => ApiResponse::not_found("Item not found"),
        Err(DeleteItemError::RepositoryError(msg)) => {
            error!(family = F::NAME, "Repository error deleting item: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
