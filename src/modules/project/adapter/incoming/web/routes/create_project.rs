use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::{
    normalize_slug, CreateProjectError, ProjectContent,
};
use crate::modules::project::application::ports::outgoing::project_repository::CreateProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub slug: String,
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

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/projects")]
pub async fn create_project_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let slug = match normalize_slug(&req.slug) {
        Ok(slug) => slug,
        Err(err) => return ApiResponse::bad_request(&err.to_string()),
    };

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

    let project_data = CreateProjectData {
        owner: UserId::from(user.user_id),
        title: content.title,
        slug,
        description: content.description,
        tech_stack: content.tech_stack,
        screenshots: content.screenshots,
        repo_url: content.repo_url,
        live_demo_url: content.live_demo_url,
        featured: content.featured,
    };

    match data.projects.create.execute(project_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("Project slug already exists")
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::modules::project::application::ports::incoming::use_cases::CreateProjectUseCase;
    use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
    use crate::modules::project::application::project_use_cases::ProjectUseCases;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use crate::tests::support::stubs::stub_project_use_cases;

    /* --------------------------------------------------
     * Mock Create Project Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockCreateProjectUseCase {
        result: Result<ProjectResult, CreateProjectError>,
    }

    #[async_trait]
    impl CreateProjectUseCase for MockCreateProjectUseCase {
        async fn execute(
            &self,
            _data: CreateProjectData,
        ) -> Result<ProjectResult, CreateProjectError> {
            self.result.clone()
        }
    }

    fn base_request() -> Value {
        serde_json::json!({
            "title": "My Project",
            "slug": "my-project",
            "description": "desc",
            "tech_stack": ["Rust"],
            "screenshots": ["https://cdn.example.com/img.png"],
            "repo_url": "https://github.com/x/y"
        })
    }

    fn project_result(owner: Uuid) -> ProjectResult {
        ProjectResult {
            id: Uuid::new_v4(),
            owner: UserId::from(owner),
            title: "My Project".to_string(),
            slug: "my-project".to_string(),
            description: "desc".to_string(),
            tech_stack: vec!["Rust".to_string()],
            screenshots: vec!["https://cdn.example.com/img.png".to_string()],
            repo_url: Some("https://github.com/x/y".to_string()),
            live_demo_url: None,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn state_with_create(
        result: Result<ProjectResult, CreateProjectError>,
    ) -> crate::tests::support::app_state_builder::TestAppStateBuilder {
        TestAppStateBuilder::default().with_projects(ProjectUseCases {
            create: std::sync::Arc::new(MockCreateProjectUseCase { result }),
            ..stub_project_use_cases()
        })
    }

    /* --------------------------------------------------
     * Success Case
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_success() {
        let user_id = Uuid::new_v4();
        let app_state = state_with_create(Ok(project_result(user_id))).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(bearer_header(user_id))
            .set_json(base_request())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "My Project");
        assert_eq!(body["data"]["slug"], "my-project");
    }

    /* --------------------------------------------------
     * Error Cases
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_slug_conflict() {
        let user_id = Uuid::new_v4();
        let app_state = state_with_create(Err(CreateProjectError::SlugAlreadyExists)).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(bearer_header(user_id))
            .set_json(base_request())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Project slug already exists");
    }

    #[actix_web::test]
    async fn test_create_project_bad_slug_is_rejected_before_use_case() {
        let user_id = Uuid::new_v4();
        let app_state = state_with_create(Ok(project_result(user_id))).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_project_handler),
        )
        .await;

        let mut body = base_request();
        body["slug"] = Value::String("has space".to_string());

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(bearer_header(user_id))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_project_requires_token() {
        let app_state = state_with_create(Err(CreateProjectError::SlugAlreadyExists)).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(base_request())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
