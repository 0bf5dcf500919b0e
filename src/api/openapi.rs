use crate::api::schemas::{ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    RegisterUserRequest, RegisteredUser,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for the portfolio content management backend",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,

        // User endpoints
        crate::modules::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::modules::auth::adapter::incoming::web::routes::update_profile_handler,

        // Catalog endpoints (achievements/extracurriculars/gallery/videos)
        // intentionally unannotated; see routes modules

        // Project endpoints
        // create_project_handler,
        // get_projects_handler,
        // get_public_projects_handler,
        // get_single_project_handler,
        // update_project_handler,
        // patch_project_handler,
        // delete_project_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisteredUser>,
            ErrorResponse,

            // Auth DTOs
            RegisterUserRequest,
            RegisteredUser,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User profile endpoints"),
        (name = "achievements", description = "Achievement items"),
        (name = "extracurriculars", description = "Extracurricular items"),
        (name = "gallery", description = "Gallery items"),
        (name = "videos", description = "Video items"),
        (name = "projects", description = "Project management endpoints"),
        (name = "preferences", description = "Preference and matching endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
