use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::ports::outgoing::user_repository::ProfileChanges;
use crate::modules::auth::application::use_cases::update_profile::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub website_url: Option<String>,
}

fn map_update_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::NotFound => ApiResponse::not_found("User not found"),
        UpdateProfileError::InvalidFullName(msg) => ApiResponse::bad_request(&msg),
        UpdateProfileError::InvalidUrl(_) => ApiResponse::bad_request(&err.to_string()),
        UpdateProfileError::RepositoryError(msg) => {
            error!("Repository error updating profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Update the caller's own profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
#[put("/api/users/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let changes = ProfileChanges {
        full_name: req.full_name,
        headline: req.headline,
        bio: req.bio,
        location: req.location,
        avatar_url: req.avatar_url,
        website_url: req.website_url,
    };

    match data.auth.update_profile.execute(user.user_id, changes).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_update_error(err),
    }
}
