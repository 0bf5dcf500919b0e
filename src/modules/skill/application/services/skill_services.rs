use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase, DeleteSkillError, DeleteSkillUseCase, GetSkillError,
    GetSkillUseCase, ListSkillsError, ListSkillsUseCase, SkillCommand, UpdateSkillError,
    UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillRepository, SkillRepositoryError, SkillResult,
};

pub struct SkillServices<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> SkillServices<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListSkillsUseCase for SkillServices<R>
where
    R: SkillRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<SkillResult>, ListSkillsError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListSkillsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for SkillServices<R>
where
    R: SkillRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        command: SkillCommand,
    ) -> Result<SkillResult, CreateSkillError> {
        self.repository
            .insert(owner, command.into_data())
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NameAlreadyExists => CreateSkillError::NameAlreadyExists,
                other => CreateSkillError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> GetSkillUseCase for SkillServices<R>
where
    R: SkillRepository,
{
    async fn execute(&self, owner: UserId, skill_id: Uuid) -> Result<SkillResult, GetSkillError> {
        self.repository
            .find_for_owner(owner, skill_id)
            .await
            .map_err(|e| GetSkillError::RepositoryError(e.to_string()))?
            .ok_or(GetSkillError::NotFound)
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for SkillServices<R>
where
    R: SkillRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        skill_id: Uuid,
        command: SkillCommand,
    ) -> Result<SkillResult, UpdateSkillError> {
        self.repository
            .update(owner, skill_id, command.into_data())
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
                SkillRepositoryError::NameAlreadyExists => UpdateSkillError::NameAlreadyExists,
                other => UpdateSkillError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for SkillServices<R>
where
    R: SkillRepository,
{
    async fn execute(&self, owner: UserId, skill_id: Uuid) -> Result<(), DeleteSkillError> {
        self.repository
            .delete(owner, skill_id)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
                other => DeleteSkillError::RepositoryError(other.to_string()),
            })
    }
}
