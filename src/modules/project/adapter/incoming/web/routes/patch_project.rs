use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::PatchProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchField, PatchProjectData,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::is_http_url;
use crate::AppState;

/// Tri-state body: omitted keeps, null clears, value replaces.
#[derive(Debug, Deserialize, Default)]
pub struct PatchProjectRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub tech_stack: PatchField<Vec<String>>,
    #[serde(default)]
    pub screenshots: PatchField<Vec<String>>,
    #[serde(default)]
    pub repo_url: PatchField<String>,
    #[serde(default)]
    pub live_demo_url: PatchField<String>,
    #[serde(default)]
    pub featured: PatchField<bool>,
}

fn validate(req: &PatchProjectRequest) -> Result<(), String> {
    if let PatchField::Value(title) = &req.title {
        if title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
    }
    if let PatchField::Value(desc) = &req.description {
        if desc.trim().is_empty() {
            return Err("Description cannot be empty".to_string());
        }
    }
    for (field, value) in [("repo_url", &req.repo_url), ("live_demo_url", &req.live_demo_url)] {
        if let PatchField::Value(url) = value {
            if !is_http_url(url) {
                return Err(format!("Field `{}` must be a valid http(s) URL", field));
            }
        }
    }
    if let PatchField::Value(shots) = &req.screenshots {
        if let Some(bad) = shots.iter().find(|s| !is_http_url(s)) {
            return Err(format!("Screenshot `{}` is not a valid http(s) URL", bad));
        }
    }
    Ok(())
}

#[patch("/api/projects/{id}")]
pub async fn patch_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(message) = validate(&req) {
        return ApiResponse::bad_request(&message);
    }

    let patch = PatchProjectData {
        title: req.title,
        description: req.description,
        tech_stack: req.tech_stack,
        screenshots: req.screenshots,
        repo_url: req.repo_url,
        live_demo_url: req.live_demo_url,
        featured: req.featured,
    };

    match data
        .projects
        .patch
        .execute(UserId::from(user.user_id), path.into_inner(), patch)
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(PatchProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(PatchProjectError::RepositoryError(msg)) => {
            error!("Repository error patching project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
