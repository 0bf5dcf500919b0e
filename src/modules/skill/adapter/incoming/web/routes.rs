use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, DeleteSkillError, GetSkillError, ListSkillsError, SkillCommand,
    UpdateSkillError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub name: String,
    #[serde(default)]
    pub level: i16,
    pub category: Option<String>,
}

fn build_command(req: SkillRequest) -> Result<SkillCommand, HttpResponse> {
    SkillCommand::new(req.name, req.level, req.category)
        .map_err(|e| ApiResponse::bad_request(&e.to_string()))
}

#[get("/api/skills")]
pub async fn get_skills_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.list.execute(UserId::from(user.user_id)).await {
        Ok(skills) => ApiResponse::list(skills),
        Err(ListSkillsError::RepositoryError(msg)) => {
            error!("Repository error listing skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    user: AuthenticatedUser,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .skills
        .create
        .execute(UserId::from(user.user_id), command)
        .await
    {
        Ok(skill) => ApiResponse::created(skill),
        Err(CreateSkillError::NameAlreadyExists) => ApiResponse::conflict("Skill already exists"),
        Err(CreateSkillError::RepositoryError(msg)) => {
            error!("Repository error creating skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/skills/{id}")]
pub async fn get_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skills
        .get
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(skill) => ApiResponse::success(skill),
        Err(GetSkillError::NotFound) => ApiResponse::not_found("Skill not found"),
        Err(GetSkillError::RepositoryError(msg)) => {
            error!("Repository error fetching skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .skills
        .update
        .execute(UserId::from(user.user_id), path.into_inner(), command)
        .await
    {
        Ok(skill) => ApiResponse::success(skill),
        Err(UpdateSkillError::NotFound) => ApiResponse::not_found("Skill not found"),
        Err(UpdateSkillError::NameAlreadyExists) => ApiResponse::conflict("Skill already exists"),
        Err(UpdateSkillError::RepositoryError(msg)) => {
            error!("Repository error updating skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skills
        .delete
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message("Skill deleted"),
        Err(DeleteSkillError::NotFound) => ApiResponse::not_found("Skill not found"),
        Err(DeleteSkillError::RepositoryError(msg)) => {
            error!("Repository error deleting skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
