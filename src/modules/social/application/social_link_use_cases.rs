use std::sync::Arc;

use crate::modules::social::application::ports::incoming::use_cases::{
    CreateSocialLinkUseCase, DeleteSocialLinkUseCase, GetSocialLinkUseCase,
    ListSocialLinksUseCase, UpdateSocialLinkUseCase,
};

#[derive(Clone)]
pub struct SocialLinkUseCases {
    pub list: Arc<dyn ListSocialLinksUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSocialLinkUseCase + Send + Sync>,
    pub get: Arc<dyn GetSocialLinkUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSocialLinkUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSocialLinkUseCase + Send + Sync>,
}
