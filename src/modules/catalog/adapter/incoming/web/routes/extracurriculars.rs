use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use super::ItemPayload;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::AppState;

#[get("/api/extracurriculars")]
pub async fn list_extracurriculars_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items(&data.catalog.extracurriculars, &user).await
}

#[get("/api/extracurriculars/type/{category}")]
pub async fn list_extracurriculars_by_type_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items_by_category(&data.catalog.extracurriculars, &user, &path.into_inner()).await
}

#[post("/api/extracurriculars/{category}")]
pub async fn create_extracurricular_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::create_item(
        &data.catalog.extracurriculars,
        &user,
        &path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[get("/api/extracurriculars/{id}")]
pub async fn get_extracurricular_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::get_item(&data.catalog.extracurriculars, &user, path.into_inner()).await
}

#[put("/api/extracurriculars/{id}")]
pub async fn update_extracurricular_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::update_item(
        &data.catalog.extracurriculars,
        &user,
        path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[delete("/api/extracurriculars/{id}")]
pub async fn delete_extracurricular_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::delete_item(&data.catalog.extracurriculars, &user, path.into_inner()).await
}
