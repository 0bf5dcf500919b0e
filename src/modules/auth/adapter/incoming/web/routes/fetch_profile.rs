use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Fetch the caller's own profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Profile"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Account no longer exists"),
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
#[get("/api/users/me")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchProfileError::NotFound) => ApiResponse::not_found("User not found"),
        Err(FetchProfileError::RepositoryError(msg)) => {
            error!("Repository error fetching profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
