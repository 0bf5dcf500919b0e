use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Username (unique identifier)
    #[schema(example = "janedoe")]
    pub username: String,

    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Display name shown on the public portfolio
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Username
    #[schema(example = "janedoe")]
    pub username: String,

    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Display name
    #[schema(example = "Jane Doe")]
    pub full_name: String,
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::UsernameAlreadyExists => {
            warn!(
                username = %req.username,
                email = %req.email,
                "Username already taken"
            );
            ApiResponse::conflict("Username already taken")
        }

        RegisterUserError::EmailAlreadyExists => {
            warn!(
                username = %req.username,
                email = %req.email,
                "Email already registered"
            );
            ApiResponse::conflict("Email already registered")
        }

        other => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %other,
                "Unhandled user registration error"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates a portfolio owner account. The returned account can log in
/// immediately; there is no verification step.
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = RegisteredUser),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Username or email already taken"),
    ),
    tag = "auth"
)]
#[post("/api/users/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match RegisterUserCommand::new(
        req.username.clone(),
        req.email.clone(),
        req.password.clone(),
        req.full_name.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "Invalid registration input"
            );
            return ApiResponse::bad_request(&err.to_string());
        }
    };

    match data.auth.register.execute(command).await {
        Ok(user) => ApiResponse::created(RegisteredUser {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }),
        Err(err) => map_register_error(err, &req),
    }
}
