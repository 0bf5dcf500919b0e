use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationError, CreateEducationUseCase, DeleteEducationError, DeleteEducationUseCase,
    EducationCommand, GetEducationError, GetEducationUseCase, ListEducationError,
    ListEducationUseCase, UpdateEducationError, UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError, EducationResult,
};

pub struct EducationServices<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> EducationServices<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListEducationUseCase for EducationServices<R>
where
    R: EducationRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<EducationResult>, ListEducationError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListEducationError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for EducationServices<R>
where
    R: EducationRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        command: EducationCommand,
    ) -> Result<EducationResult, CreateEducationError> {
        self.repository
            .insert(owner, command.into_data())
            .await
            .map_err(|e| CreateEducationError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> GetEducationUseCase for EducationServices<R>
where
    R: EducationRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<EducationResult, GetEducationError> {
        self.repository
            .find_for_owner(owner, entry_id)
            .await
            .map_err(|e| GetEducationError::RepositoryError(e.to_string()))?
            .ok_or(GetEducationError::NotFound)
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for EducationServices<R>
where
    R: EducationRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        entry_id: Uuid,
        command: EducationCommand,
    ) -> Result<EducationResult, UpdateEducationError> {
        self.repository
            .update(owner, entry_id, command.into_data())
            .await
            .map_err(|e| match e {
                EducationRepositoryError::NotFound => UpdateEducationError::NotFound,
                other => UpdateEducationError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for EducationServices<R>
where
    R: EducationRepository,
{
    async fn execute(&self, owner: UserId, entry_id: Uuid) -> Result<(), DeleteEducationError> {
        self.repository
            .delete(owner, entry_id)
            .await
            .map_err(|e| match e {
                EducationRepositoryError::NotFound => DeleteEducationError::NotFound,
                other => DeleteEducationError::RepositoryError(other.to_string()),
            })
    }
}
