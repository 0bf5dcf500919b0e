use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

pub fn token(user_id: Uuid) -> String {
    jwt_service().generate_access_token(user_id).unwrap()
}

/// `("Authorization", "Bearer …")` header pair for test requests.
pub fn bearer_header(user_id: Uuid) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token(user_id)))
}

/// The token provider `app_data` the auth extractor resolves.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}
