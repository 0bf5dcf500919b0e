use std::sync::Arc;

use crate::modules::language::application::ports::incoming::use_cases::{
    CreateLanguageUseCase, DeleteLanguageUseCase, GetLanguageUseCase, ListLanguagesUseCase,
    UpdateLanguageUseCase,
};

#[derive(Clone)]
pub struct LanguageUseCases {
    pub list: Arc<dyn ListLanguagesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateLanguageUseCase + Send + Sync>,
    pub get: Arc<dyn GetLanguageUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateLanguageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteLanguageUseCase + Send + Sync>,
}
