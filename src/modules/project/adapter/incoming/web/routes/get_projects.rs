use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects")]
pub async fn get_projects_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .projects
        .get_list
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(projects) => ApiResponse::list(projects),
        Err(GetProjectsError::RepositoryError(msg)) => {
            error!("Repository error listing projects: {}", msg);
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

    use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
    use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
    use crate::modules::project::application::project_use_cases::ProjectUseCases;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use crate::tests::support::stubs::stub_project_use_cases;

    struct MockGetProjects {
        result: Result<Vec<ProjectResult>, GetProjectsError>,
    }

    #[async_trait]
    impl GetProjectsUseCase for MockGetProjects {
        async fn execute(&self, _owner: UserId) -> Result<Vec<ProjectResult>, GetProjectsError> {
            self.result.clone()
        }
    }

    fn project(owner: Uuid, title: &str) -> ProjectResult {
        ProjectResult {
            id: Uuid::new_v4(),
            owner: UserId::from(owner),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: "d".to_string(),
            tech_stack: vec![],
            screenshots: vec![],
            repo_url: None,
            live_demo_url: None,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_list_projects_with_count() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_projects(ProjectUseCases {
                get_list: std::sync::Arc::new(MockGetProjects {
                    result: Ok(vec![project(user_id, "One"), project(user_id, "Two")]),
                }),
                ..stub_project_use_cases()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects")
            .insert_header(bearer_header(user_id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"][1]["title"], "Two");
    }
}
