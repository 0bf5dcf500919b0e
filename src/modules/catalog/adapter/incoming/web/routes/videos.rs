use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use super::ItemPayload;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::AppState;

#[get("/api/videos")]
pub async fn list_videos_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items(&data.catalog.videos, &user).await
}

#[get("/api/videos/type/{category}")]
pub async fn list_videos_by_type_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items_by_category(&data.catalog.videos, &user, &path.into_inner()).await
}

#[post("/api/videos/{category}")]
pub async fn create_video_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::create_item(
        &data.catalog.videos,
        &user,
        &path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[get("/api/videos/{id}")]
pub async fn get_video_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::get_item(&data.catalog.videos, &user, path.into_inner()).await
}

#[put("/api/videos/{id}")]
pub async fn update_video_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::update_item(
        &data.catalog.videos,
        &user,
        path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[delete("/api/videos/{id}")]
pub async fn delete_video_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::delete_item(&data.catalog.videos, &user, path.into_inner()).await
}
