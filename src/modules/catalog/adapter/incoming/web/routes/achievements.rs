use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use super::ItemPayload;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::AppState;

#[get("/api/achievements")]
pub async fn list_achievements_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items(&data.catalog.achievements, &user).await
}

#[get("/api/achievements/type/{category}")]
pub async fn list_achievements_by_type_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::list_items_by_category(&data.catalog.achievements, &user, &path.into_inner()).await
}

#[post("/api/achievements/{category}")]
pub async fn create_achievement_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::create_item(
        &data.catalog.achievements,
        &user,
        &path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[get("/api/achievements/{id}")]
pub async fn get_achievement_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::get_item(&data.catalog.achievements, &user, path.into_inner()).await
}

#[put("/api/achievements/{id}")]
pub async fn update_achievement_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<ItemPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::update_item(
        &data.catalog.achievements,
        &user,
        path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[delete("/api/achievements/{id}")]
pub async fn delete_achievement_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    super::delete_item(&data.catalog.achievements, &user, path.into_inner()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;

    use crate::modules::auth::application::domain::entities::UserId;
    use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
    use crate::modules::catalog::application::ports::incoming::use_cases::{
        CreateItemError, CreateItemUseCase, DeleteItemError, DeleteItemUseCase,
        ListItemsByCategoryError, ListItemsByCategoryUseCase,
    };
    use crate::modules::catalog::domain::achievements::{AchievementDetails, Achievements};
    use crate::modules::catalog::domain::category::UnknownCategory;
    use crate::modules::catalog::domain::item::{CatalogItem, ItemDraft, ItemValidationError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use crate::tests::support::stubs::stub_catalog_use_cases;

    fn award(owner: Uuid, name: &str) -> CatalogItem<Achievements> {
        CatalogItem {
            id: Uuid::new_v4(),
            owner: UserId::from(owner),
            name: name.to_string(),
            description: Some("x".to_string()),
            date: None,
            details: AchievementDetails::Award {
                issuer: Some("Conf".to_string()),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /* --------------------------------------------------
     * Mocks
     * -------------------------------------------------- */

    struct MockCreate {
        result: Result<CatalogItem<Achievements>, CreateItemError>,
    }

    #[async_trait]
    impl CreateItemUseCase<Achievements> for MockCreate {
        async fn execute(
            &self,
            _owner: UserId,
            _category: &str,
            _draft: ItemDraft,
        ) -> Result<CatalogItem<Achievements>, CreateItemError> {
            self.result.clone()
        }
    }

    struct MockListByCategory {
        result: Result<Vec<CatalogItem<Achievements>>, ListItemsByCategoryError>,
    }

    #[async_trait]
    impl ListItemsByCategoryUseCase<Achievements> for MockListByCategory {
        async fn execute(
            &self,
            _owner: UserId,
            _category: &str,
        ) -> Result<Vec<CatalogItem<Achievements>>, ListItemsByCategoryError> {
            self.result.clone()
        }
    }

    struct MockDelete {
        result: Result<(), DeleteItemError>,
    }

    #[async_trait]
    impl DeleteItemUseCase<Achievements> for MockDelete {
        async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteItemError> {
            self.result.clone()
        }
    }

    fn bundle_with_create(
        result: Result<CatalogItem<Achievements>, CreateItemError>,
    ) -> CatalogUseCases<Achievements> {
        CatalogUseCases {
            create: std::sync::Arc::new(MockCreate { result }),
            ..stub_catalog_use_cases::<Achievements>()
        }
    }

    /* --------------------------------------------------
     * Create
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_award_returns_item_with_server_id() {
        let user_id = Uuid::new_v4();
        let item = award(user_id, "Best Demo");
        let item_id = item.id;

        let app_state = TestAppStateBuilder::default()
            .with_achievements(bundle_with_create(Ok(item)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_achievement_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/achievements/award")
            .insert_header(bearer_header(user_id))
            .set_json(serde_json::json!({
                "type": "award",
                "title": "Best Demo",
                "issuer": "Conf",
                "date": "2024-01-01",
                "description": "x"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Best Demo");
        assert_eq!(body["data"]["category"], "award");
        assert_eq!(body["data"]["id"], item_id.to_string());
    }

    #[actix_web::test]
    async fn test_create_missing_issuer_is_bad_request() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_achievements(bundle_with_create(Err(CreateItemError::Validation(
                ItemValidationError::MissingField("issuer"),
            ))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_achievement_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/achievements/certification")
            .insert_header(bearer_header(user_id))
            .set_json(serde_json::json!({ "title": "Cert" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Missing required field `issuer`");
    }

    #[actix_web::test]
    async fn test_create_unknown_category_is_bad_request() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_achievements(bundle_with_create(Err(CreateItemError::UnknownCategory(
                UnknownCategory {
                    family: "achievements",
                    given: "trophies".to_string(),
                },
            ))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_achievement_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/achievements/trophies")
            .insert_header(bearer_header(user_id))
            .set_json(serde_json::json!({ "title": "X", "description": "y" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Unknown achievements category `trophies`"
        );
    }

    #[actix_web::test]
    async fn test_create_requires_token() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_achievement_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/achievements/award")
            .set_json(serde_json::json!({ "title": "X" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    /* --------------------------------------------------
     * List by type
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_list_by_type_sets_count() {
        let user_id = Uuid::new_v4();
        let items = vec![award(user_id, "Best Demo"), award(user_id, "Runner Up")];

        let app_state = TestAppStateBuilder::default()
            .with_achievements(CatalogUseCases {
                list_by_category: std::sync::Arc::new(MockListByCategory { result: Ok(items) }),
                ..stub_catalog_use_cases::<Achievements>()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(list_achievements_by_type_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/achievements/type/awards")
            .insert_header(bearer_header(user_id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"][0]["name"], "Best Demo");
    }

    /* --------------------------------------------------
     * Delete
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_delete_missing_item_is_not_found() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_achievements(CatalogUseCases {
                delete: std::sync::Arc::new(MockDelete {
                    result: Err(DeleteItemError::NotFound),
                }),
                ..stub_catalog_use_cases::<Achievements>()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_achievement_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/achievements/{}", Uuid::new_v4()))
            .insert_header(bearer_header(user_id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_success_is_plain_message() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_achievements(CatalogUseCases {
                delete: std::sync::Arc::new(MockDelete { result: Ok(()) }),
                ..stub_catalog_use_cases::<Achievements>()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_achievement_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/achievements/{}", Uuid::new_v4()))
            .insert_header(bearer_header(user_id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Item deleted");
    }
}
