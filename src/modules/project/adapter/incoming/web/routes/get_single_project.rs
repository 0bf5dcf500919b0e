use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .projects
        .get_single
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(GetSingleProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(GetSingleProjectError::RepositoryError(msg)) => {
            error!("Repository error fetching project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
