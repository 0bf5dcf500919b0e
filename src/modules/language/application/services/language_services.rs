use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::language::application::ports::incoming::use_cases::{
    CreateLanguageError, CreateLanguageUseCase, DeleteLanguageError, DeleteLanguageUseCase,
    GetLanguageError, GetLanguageUseCase, LanguageCommand, ListLanguagesError,
    ListLanguagesUseCase, UpdateLanguageError, UpdateLanguageUseCase,
};
use crate::modules::language::application::ports::outgoing::{
    LanguageRepository, LanguageRepositoryError, LanguageResult,
};

pub struct LanguageServices<R>
where
    R: LanguageRepository,
{
    repository: R,
}

impl<R> LanguageServices<R>
where
    R: LanguageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListLanguagesUseCase for LanguageServices<R>
where
    R: LanguageRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<LanguageResult>, ListLanguagesError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListLanguagesError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> CreateLanguageUseCase for LanguageServices<R>
where
    R: LanguageRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        command: LanguageCommand,
    ) -> Result<LanguageResult, CreateLanguageError> {
        self.repository
            .insert(owner, command.into_data())
            .await
            .map_err(|e| match e {
                LanguageRepositoryError::NameAlreadyExists => {
                    CreateLanguageError::NameAlreadyExists
                }
                other => CreateLanguageError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> GetLanguageUseCase for LanguageServices<R>
where
    R: LanguageRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        language_id: Uuid,
    ) -> Result<LanguageResult, GetLanguageError> {
        self.repository
            .find_for_owner(owner, language_id)
            .await
            .map_err(|e| GetLanguageError::RepositoryError(e.to_string()))?
            .ok_or(GetLanguageError::NotFound)
    }
}

#[async_trait]
impl<R> UpdateLanguageUseCase for LanguageServices<R>
where
    R: LanguageRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        language_id: Uuid,
        command: LanguageCommand,
    ) -> Result<LanguageResult, UpdateLanguageError> {
        self.repository
            .update(owner, language_id, command.into_data())
            .await
            .map_err(|e| match e {
                LanguageRepositoryError::NotFound => UpdateLanguageError::NotFound,
                LanguageRepositoryError::NameAlreadyExists => {
                    UpdateLanguageError::NameAlreadyExists
                }
                other => UpdateLanguageError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteLanguageUseCase for LanguageServices<R>
where
    R: LanguageRepository,
{
    async fn execute(&self, owner: UserId, language_id: Uuid) -> Result<(), DeleteLanguageError> {
        self.repository
            .delete(owner, language_id)
            .await
            .map_err(|e| match e {
                LanguageRepositoryError::NotFound => DeleteLanguageError::NotFound,
                other => DeleteLanguageError::RepositoryError(other.to_string()),
            })
    }
}
