use std::sync::Arc;

use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, GetEducationUseCase, ListEducationUseCase,
    UpdateEducationUseCase,
};

#[derive(Clone)]
pub struct EducationUseCases {
    pub list: Arc<dyn ListEducationUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEducationUseCase + Send + Sync>,
    pub get: Arc<dyn GetEducationUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEducationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}
