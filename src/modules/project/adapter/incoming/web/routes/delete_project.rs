use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .projects
        .delete
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message("Project deleted"),
        Err(DeleteProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!("Repository error deleting project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
