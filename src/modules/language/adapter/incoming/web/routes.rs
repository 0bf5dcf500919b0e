use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::language::application::ports::incoming::use_cases::{
    CreateLanguageError, DeleteLanguageError, GetLanguageError, LanguageCommand,
    ListLanguagesError, UpdateLanguageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub name: String,
    pub proficiency: String,
}

fn build_command(req: LanguageRequest) -> Result<LanguageCommand, HttpResponse> {
    LanguageCommand::new(req.name, req.proficiency)
        .map_err(|e| ApiResponse::bad_request(&e.to_string()))
}

#[get("/api/languages")]
pub async fn get_languages_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.languages.list.execute(UserId::from(user.user_id)).await {
        Ok(languages) => ApiResponse::list(languages),
        Err(ListLanguagesError::RepositoryError(msg)) => {
            error!("Repository error listing languages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/languages")]
pub async fn create_language_handler(
    user: AuthenticatedUser,
    req: web::Json<LanguageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .languages
        .create
        .execute(UserId::from(user.user_id), command)
        .await
    {
        Ok(language) => ApiResponse::created(language),
        Err(CreateLanguageError::NameAlreadyExists) => {
            ApiResponse::conflict("Language already exists")
        }
        Err(CreateLanguageError::RepositoryError(msg)) => {
            error!("Repository error creating language: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/languages/{id}")]
pub async fn get_language_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .languages
        .get
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(language) => ApiResponse::success(language),
        Err(GetLanguageError::NotFound) => ApiResponse::not_found("Language not found"),
        Err(GetLanguageError::RepositoryError(msg)) => {
            error!("Repository error fetching language: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/languages/{id}")]
pub async fn update_language_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<LanguageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .languages
        .update
        .execute(UserId::from(user.user_id), path.into_inner(), command)
        .await
    {
        Ok(language) => ApiResponse::success(language),
        Err(UpdateLanguageError::NotFound) => ApiResponse::not_found("Language not found"),
        Err(UpdateLanguageError::NameAlreadyExists) => {
            ApiResponse::conflict("Language already exists")
        }
        Err(UpdateLanguageError::RepositoryError(msg)) => {
            error!("Repository error updating language: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/languages/{id}")]
pub async fn delete_language_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .languages
        .delete
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message("Language deleted"),
        Err(DeleteLanguageError::NotFound) => ApiResponse::not_found("Language not found"),
        Err(DeleteLanguageError::RepositoryError(msg)) => {
            error!("Repository error deleting language: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
