use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::incoming::use_cases::{
    CreateSocialLinkError, CreateSocialLinkUseCase, DeleteSocialLinkError,
    DeleteSocialLinkUseCase, GetSocialLinkError, GetSocialLinkUseCase, ListSocialLinksError,
    ListSocialLinksUseCase, SocialLinkCommand, UpdateSocialLinkError, UpdateSocialLinkUseCase,
};
use crate::modules::social::application::ports::outgoing::{
    SocialLinkRepository, SocialLinkRepositoryError, SocialLinkResult,
};

pub struct SocialLinkServices<R>
where
    R: SocialLinkRepository,
{
    repository: R,
}

impl<R> SocialLinkServices<R>
where
    R: SocialLinkRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListSocialLinksUseCase for SocialLinkServices<R>
where
    R: SocialLinkRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<SocialLinkResult>, ListSocialLinksError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListSocialLinksError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> CreateSocialLinkUseCase for SocialLinkServices<R>
where
    R: SocialLinkRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        command: SocialLinkCommand,
    ) -> Result<SocialLinkResult, CreateSocialLinkError> {
        self.repository
            .insert(owner, command.into_data())
            .await
            .map_err(|e| CreateSocialLinkError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> GetSocialLinkUseCase for SocialLinkServices<R>
where
    R: SocialLinkRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        link_id: Uuid,
    ) -> Result<SocialLinkResult, GetSocialLinkError> {
        self.repository
            .find_for_owner(owner, link_id)
            .await
            .map_err(|e| GetSocialLinkError::RepositoryError(e.to_string()))?
            .ok_or(GetSocialLinkError::NotFound)
    }
}

#[async_trait]
impl<R> UpdateSocialLinkUseCase for SocialLinkServices<R>
where
    R: SocialLinkRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        link_id: Uuid,
        command: SocialLinkCommand,
    ) -> Result<SocialLinkResult, UpdateSocialLinkError> {
        self.repository
            .update(owner, link_id, command.into_data())
            .await
            .map_err(|e| match e {
                SocialLinkRepositoryError::NotFound => UpdateSocialLinkError::NotFound,
                other => UpdateSocialLinkError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteSocialLinkUseCase for SocialLinkServices<R>
where
    R: SocialLinkRepository,
{
    async fn execute(&self, owner: UserId, link_id: Uuid) -> Result<(), DeleteSocialLinkError> {
        self.repository
            .delete(owner, link_id)
            .await
            .map_err(|e| match e {
                SocialLinkRepositoryError::NotFound => DeleteSocialLinkError::NotFound,
                other => DeleteSocialLinkError::RepositoryError(other.to_string()),
            })
    }
}
