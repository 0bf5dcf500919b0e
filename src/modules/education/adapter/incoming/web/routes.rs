use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationError, DeleteEducationError, EducationCommand, GetEducationError,
    ListEducationError, UpdateEducationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EducationRequest {
    pub school: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_year: i16,
    pub end_year: Option<i16>,
}

fn build_command(req: EducationRequest) -> Result<EducationCommand, HttpResponse> {
    EducationCommand::new(
        req.school,
        req.degree,
        req.field_of_study,
        req.start_year,
        req.end_year,
    )
    .map_err(|e| ApiResponse::bad_request(&e.to_string()))
}

#[get("/api/education")]
pub async fn get_education_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.list.execute(UserId::from(user.user_id)).await {
        Ok(entries) => ApiResponse::list(entries),
        Err(ListEducationError::RepositoryError(msg)) => {
            error!("Repository error listing education: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/education")]
pub async fn create_education_handler(
    user: AuthenticatedUser,
    req: web::Json<EducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .education
        .create
        .execute(UserId::from(user.user_id), command)
        .await
    {
        Ok(entry) => ApiResponse::created(entry),
        Err(CreateEducationError::RepositoryError(msg)) => {
            error!("Repository error creating education entry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/education/{id}")]
pub async fn get_education_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .education
        .get
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(entry) => ApiResponse::success(entry),
        Err(GetEducationError::NotFound) => ApiResponse::not_found("Education entry not found"),
        Err(GetEducationError::RepositoryError(msg)) => {
            error!("Repository error fetching education entry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/education/{id}")]
pub async fn update_education_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<EducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .education
        .update
        .execute(UserId::from(user.user_id), path.into_inner(), command)
        .await
    {
        Ok(entry) => ApiResponse::success(entry),
        Err(UpdateEducationError::NotFound) => ApiResponse::not_found("Education entry not found"),
        Err(UpdateEducationError::RepositoryError(msg)) => {
            error!("Repository error updating education entry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .education
        .delete
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message("Education entry deleted"),
        Err(DeleteEducationError::NotFound) => ApiResponse::not_found("Education entry not found"),
        Err(DeleteEducationError::RepositoryError(msg)) => {
            error!("Repository error deleting education entry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
