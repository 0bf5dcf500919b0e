use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, GetPublicProjectsError, GetPublicProjectsUseCase,
    GetSingleProjectError, GetSingleProjectUseCase, PatchProjectError, PatchProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData, ProjectRepositoryError, ProjectResult, UpdateProjectData,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};

fn map_repo_error_not_found<E>(
    e: ProjectRepositoryError,
    not_found: E,
    repository: impl Fn(String) -> E,
) -> E {
    match e {
        ProjectRepositoryError::NotFound => not_found,
        other => repository(other.to_string()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, data: CreateProjectData) -> Result<ProjectResult, CreateProjectError> {
        self.project_repository
            .create_project(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
                other => CreateProjectError::RepositoryError(other.to_string()),
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Queries
// ──────────────────────────────────────────────────────────
//

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    project_query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(project_query: Q) -> Self {
        Self { project_query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<ProjectResult>, GetProjectsError> {
        self.project_query
            .list_for_owner(owner)
            .await
            .map_err(|ProjectQueryError::DatabaseError(msg)| {
                GetProjectsError::RepositoryError(msg)
            })
    }
}

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    project_query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(project_query: Q) -> Self {
        Self { project_query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<ProjectResult, GetSingleProjectError> {
        self.project_query
            .find_for_owner(owner, project_id)
            .await
            .map_err(|ProjectQueryError::DatabaseError(msg)| {
                GetSingleProjectError::RepositoryError(msg)
            })?
            .ok_or(GetSingleProjectError::NotFound)
    }
}

/// Public listing reuses the owner-scoped query with a resolved owner id.
pub struct GetPublicProjectsService<Q>
where
    Q: ProjectQuery,
{
    project_query: Q,
}

impl<Q> GetPublicProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(project_query: Q) -> Self {
        Self { project_query }
    }
}

#[async_trait]
impl<Q> GetPublicProjectsUseCase for GetPublicProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<ProjectResult>, GetPublicProjectsError> {
        self.project_query
            .list_for_owner(owner)
            .await
            .map_err(|ProjectQueryError::DatabaseError(msg)| {
                GetPublicProjectsError::RepositoryError(msg)
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Update / Patch / Delete
// ──────────────────────────────────────────────────────────
//

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectResult, UpdateProjectError> {
        self.project_repository
            .update_project(owner, project_id, data)
            .await
            .map_err(|e| {
                map_repo_error_not_found(
                    e,
                    UpdateProjectError::NotFound,
                    UpdateProjectError::RepositoryError,
                )
            })
    }
}

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, PatchProjectError> {
        self.project_repository
            .patch_project(owner, project_id, data)
            .await
            .map_err(|e| {
                map_repo_error_not_found(
                    e,
                    PatchProjectError::NotFound,
                    PatchProjectError::RepositoryError,
                )
            })
    }
}

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, owner: UserId, project_id: Uuid) -> Result<(), DeleteProjectError> {
        self.project_repository
            .delete_project(owner, project_id)
            .await
            .map_err(|e| {
                map_repo_error_not_found(
                    e,
                    DeleteProjectError::NotFound,
                    DeleteProjectError::RepositoryError,
                )
            })
    }
}
