use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectContent, UpdateProjectError,
};
use crate::modules::project::application::ports::outgoing::project_repository::UpdateProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full replace; the slug is immutable and deliberately absent here.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    pub repo_url: Option<String>,
    pub live_demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let content = match ProjectContent::new(
        req.title,
        req.description,
        req.tech_stack,
        req.screenshots,
        req.repo_url,
        req.live_demo_url,
        req.featured,
    ) {
        Ok(content) => content,
        Err(err) => return ApiResponse::bad_request(&err.to_string()),
    };

    let update = UpdateProjectData {
        title: content.title,
        description: content.description,
        tech_stack: content.tech_stack,
        screenshots: content.screenshots,
        repo_url: content.repo_url,
        live_demo_url: content.live_demo_url,
        featured: content.featured,
    };

    match data
        .projects
        .update
        .execute(UserId::from(user.user_id), path.into_inner(), update)
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(UpdateProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(UpdateProjectError::RepositoryError(msg)) => {
            error!("Repository error updating project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
