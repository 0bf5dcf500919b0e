use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => ApiResponse::unauthorized("Invalid email or password"),
        other => {
            error!(error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with email and password
///
/// Returns a bearer access token for use on protected routes.
#[utoipa::path(
    post,
    path = "/api/users/login",
    responses(
        (status = 200, description = "Logged in"),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Invalid email or password"),
    ),
    tag = "auth"
)]
#[post("/api/users/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    // LoginRequest validates inside Deserialize; a malformed body never
    // reaches this point.
    let request = req.into_inner();

    match data.auth.login.execute(request).await {
        Ok(response) => ApiResponse::success(response),
        Err(err) => {
            if matches!(err, LoginError::InvalidCredentials) {
                warn!("Login attempt with invalid credentials");
            }
            map_login_error(err)
        }
    }
}
