use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use super::ItemPayload;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::AppState;

#[get("/api/gallery")]
pub async fn list_gallery_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items(&data.catalog.gallery, &user).await
}

#[get("/api/gallery/type/{category}")]
pub async fn list_gallery_by_type_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items_by_category(&data.catalog.gallery, &user, &path.into_inner()).await
}

#[post("/api/gallery/{category}")]
pub async fn create_gallery_item_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::create_item(
        &data.catalog.gallery,
        &user,
        &path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[get("/api/gallery/{id}")]
pub async fn get_gallery_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::get_item(&data.catalog.gallery, &user, path.into_inner()).await
}

#[put("/api/gallery/{id}")]
pub async fn update_gallery_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::update_item(
        &data.catalog.gallery,
        &user,
        path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[delete("/api/gallery/{id}")]
pub async fn delete_gallery_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::delete_item(&data.catalog.gallery, &user, path.into_inner()).await
}
