use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::preference::application::matching::{rank_similar_users, SimilarUser};
use crate::modules::preference::application::ports::incoming::use_cases::{
    FindSimilarUsersError, FindSimilarUsersUseCase, GetPreferencesError, GetPreferencesUseCase,
    PreferenceCommand, UpsertPreferencesError, UpsertPreferencesUseCase,
};
use crate::modules::preference::application::ports::outgoing::{
    PreferenceRepository, PreferenceResult,
};

pub struct PreferenceServices<R>
where
    R: PreferenceRepository,
{
    repository: R,
}

impl<R> PreferenceServices<R>
where
    R: PreferenceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPreferencesUseCase for PreferenceServices<R>
where
    R: PreferenceRepository,
{
    async fn execute(&self, owner: UserId) -> Result<PreferenceResult, GetPreferencesError> {
        self.repository
            .find_for_owner(owner)
            .await
            .map_err(|e| GetPreferencesError::RepositoryError(e.to_string()))?
            .ok_or(GetPreferencesError::NotFound)
    }
}

#[async_trait]
impl<R> UpsertPreferencesUseCase for PreferenceServices<R>
where
    R: PreferenceRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        command: PreferenceCommand,
    ) -> Result<PreferenceResult, UpsertPreferencesError> {
        self.repository
            .upsert(owner, command.into_data())
            .await
            .map_err(|e| UpsertPreferencesError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> FindSimilarUsersUseCase for PreferenceServices<R>
where
    R: PreferenceRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<SimilarUser>, FindSimilarUsersError> {
        let own = self
            .repository
            .find_for_owner(owner)
            .await
            .map_err(|e| FindSimilarUsersError::RepositoryError(e.to_string()))?
            .ok_or(FindSimilarUsersError::PreferencesNotSet)?;

        let peers = self
            .repository
            .list_peers(owner)
            .await
            .map_err(|e| FindSimilarUsersError::RepositoryError(e.to_string()))?;

        Ok(rank_similar_users(&own.interests, own.theme, &peers))
    }
}
