use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::preference::application::ports::incoming::use_cases::{
    FindSimilarUsersError, GetPreferencesError, PreferenceCommand, UpsertPreferencesError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PreferenceRequest {
    pub theme: String,
    pub accent_color: Option<String>,
    #[serde(default)]
    pub show_email: bool,
    #[serde(default)]
    pub newsletter: bool,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[get("/api/preferences")]
pub async fn get_preferences_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .preferences
        .get
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(prefs) => ApiResponse::success(prefs),
        Err(GetPreferencesError::NotFound) => ApiResponse::not_found("Preferences not found"),
        Err(GetPreferencesError::RepositoryError(msg)) => {
            error!("Repository error fetching preferences: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/preferences")]
pub async fn put_preferences_handler(
    user: AuthenticatedUser,
    req: web::Json<PreferenceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match PreferenceCommand::new(
        req.theme,
        req.accent_color,
        req.show_email,
        req.newsletter,
        req.interests,
    ) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request(&err.to_string()),
    };

    match data
        .preferences
        .upsert
        .execute(UserId::from(user.user_id), command)
        .await
    {
        Ok(prefs) => ApiResponse::success(prefs),
        Err(UpsertPreferencesError::RepositoryError(msg)) => {
            error!("Repository error saving preferences: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/preferences/similar")]
pub async fn get_similar_users_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .preferences
        .find_similar
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(similar) => ApiResponse::list(similar),
        Err(FindSimilarUsersError::PreferencesNotSet) => {
            ApiResponse::not_found("Save your preferences before requesting matches")
        }
        Err(FindSimilarUsersError::RepositoryError(msg)) => {
            error!("Repository error matching preferences: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
