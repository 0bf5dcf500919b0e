use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    fetch_profile::FetchProfileUseCase, login_user::LoginUserUseCase,
    register_user::RegisterUserUseCase, update_profile::UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
