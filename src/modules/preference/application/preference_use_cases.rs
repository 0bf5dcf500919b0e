use std::sync::Arc;

use crate::modules::preference::application::ports::incoming::use_cases::{
    FindSimilarUsersUseCase, GetPreferencesUseCase, UpsertPreferencesUseCase,
};

#[derive(Clone)]
pub struct PreferenceUseCases {
    pub get: Arc<dyn GetPreferencesUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertPreferencesUseCase + Send + Sync>,
    pub find_similar: Arc<dyn FindSimilarUsersUseCase + Send + Sync>,
}
