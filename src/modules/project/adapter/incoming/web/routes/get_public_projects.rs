use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::resolve_owner_id_or_response;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::GetPublicProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Unauthenticated portfolio listing, owner resolved by username.
#[get("/api/public/{username}/projects")]
pub async fn get_public_projects_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    let owner_id = match resolve_owner_id_or_response(&data, &username).await {
        Ok(owner_id) => owner_id,
        Err(response) => return response,
    };

    match data
        .projects
        .get_public_list
        .execute(UserId::from(owner_id))
        .await
    {
        Ok(projects) => ApiResponse::list(projects),
        Err(GetPublicProjectsError::RepositoryError(msg)) => {
            error!(
                username = %username,
                "Repository error listing public projects: {}", msg
            );
            ApiResponse::internal_error()
        }
    }
}
