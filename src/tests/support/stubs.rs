//! Default stand-ins for every use case. Each stub either errors with a
//! "not used in this test" repository failure or returns the empty result,
//! so a route test only has to mock the one use case it exercises.

use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::modules::auth::application::use_cases::fetch_profile::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::modules::auth::application::use_cases::login_user::{
    LoginError, LoginRequest, LoginUserResponse, LoginUserUseCase,
};
use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::modules::auth::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::user_repository::ProfileChanges;

use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateItemError, CreateItemUseCase, DeleteItemError, DeleteItemUseCase, GetItemError,
    GetItemUseCase, ListItemsByCategoryError, ListItemsByCategoryUseCase, ListItemsError,
    ListItemsUseCase, UpdateItemError, UpdateItemInput, UpdateItemUseCase,
};
use crate::modules::catalog::domain::item::{CatalogFamily, CatalogItem, GroupedItems, ItemDraft};

use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::education::application::ports::incoming::use_cases as education_uc;
use crate::modules::education::application::ports::outgoing::EducationResult;

use crate::modules::language::application::language_use_cases::LanguageUseCases;
use crate::modules::language::application::ports::incoming::use_cases as language_uc;
use crate::modules::language::application::ports::outgoing::LanguageResult;

use crate::modules::preference::application::matching::SimilarUser;
use crate::modules::preference::application::ports::incoming::use_cases as preference_uc;
use crate::modules::preference::application::ports::outgoing::PreferenceResult;
use crate::modules::preference::application::preference_use_cases::PreferenceUseCases;

use crate::modules::project::application::ports::incoming::use_cases as project_uc;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData, ProjectResult, UpdateProjectData,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;

use crate::modules::skill::application::ports::incoming::use_cases as skill_uc;
use crate::modules::skill::application::ports::outgoing::SkillResult;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;

use crate::modules::social::application::ports::incoming::use_cases as social_uc;
use crate::modules::social::application::ports::outgoing::SocialLinkResult;
use crate::modules::social::application::social_link_use_cases::SocialLinkUseCases;

const NOT_USED: &str = "not used in this test";

//
// ──────────────────────────────────────────────────────────
// Auth stubs
// ──────────────────────────────────────────────────────────
//

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<User, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::QueryError(NOT_USED.to_string()))
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<User, FetchProfileError> {
        Err(FetchProfileError::NotFound)
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _changes: ProfileChanges,
    ) -> Result<User, UpdateProfileError> {
        Err(UpdateProfileError::NotFound)
    }
}

/// Knows no usernames; public routes resolve to 404.
pub struct DummyUserQuery;

#[async_trait]
impl UserQuery for DummyUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }
}

//
// ──────────────────────────────────────────────────────────
// Catalog stubs (generic over the family)
// ──────────────────────────────────────────────────────────
//

struct StubListItems<F>(PhantomData<F>);

#[async_trait]
impl<F: CatalogFamily> ListItemsUseCase<F> for StubListItems<F> {
    async fn execute(&self, _owner: UserId) -> Result<GroupedItems<F>, ListItemsError> {
        Ok(GroupedItems::new(vec![]))
    }
}

struct StubListItemsByCategory<F>(PhantomData<F>);

#[async_trait]
impl<F: CatalogFamily> ListItemsByCategoryUseCase<F> for StubListItemsByCategory<F> {
    async fn execute(
        &self,
        _owner: UserId,
        _category: &str,
    ) -> Result<Vec<CatalogItem<F>>, ListItemsByCategoryError> {
        Ok(vec![])
    }
}

struct StubCreateItem<F>(PhantomData<F>);

#[async_trait]
impl<F: CatalogFamily> CreateItemUseCase<F> for StubCreateItem<F> {
    async fn execute(
        &self,
        _owner: UserId,
        _category: &str,
        _draft: ItemDraft,
    ) -> Result<CatalogItem<F>, CreateItemError> {
        Err(CreateItemError::RepositoryError(NOT_USED.to_string()))
    }
}

struct StubGetItem<F>(PhantomData<F>);

#[async_trait]
impl<F: CatalogFamily> GetItemUseCase<F> for StubGetItem<F> {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<CatalogItem<F>, GetItemError> {
        Err(GetItemError::NotFound)
    }
}

struct StubUpdateItem<F>(PhantomData<F>);

#[async_trait]
impl<F: CatalogFamily> UpdateItemUseCase<F> for StubUpdateItem<F> {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
        _input: UpdateItemInput,
    ) -> Result<CatalogItem<F>, UpdateItemError> {
        Err(UpdateItemError::NotFound)
    }
}

struct StubDeleteItem<F>(PhantomData<F>);

#[async_trait]
impl<F: CatalogFamily> DeleteItemUseCase<F> for StubDeleteItem<F> {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteItemError> {
        Err(DeleteItemError::NotFound)
    }
}

pub fn stub_catalog_use_cases<F: CatalogFamily>() -> CatalogUseCases<F> {
    CatalogUseCases {
        list: Arc::new(StubListItems::<F>(PhantomData)),
        list_by_category: Arc::new(StubListItemsByCategory::<F>(PhantomData)),
        create: Arc::new(StubCreateItem::<F>(PhantomData)),
        get: Arc::new(StubGetItem::<F>(PhantomData)),
        update: Arc::new(StubUpdateItem::<F>(PhantomData)),
        delete: Arc::new(StubDeleteItem::<F>(PhantomData)),
    }
}

//
// ──────────────────────────────────────────────────────────
// Project stubs
// ──────────────────────────────────────────────────────────
//

struct StubCreateProject;

#[async_trait]
impl project_uc::CreateProjectUseCase for StubCreateProject {
    async fn execute(
        &self,
        _data: CreateProjectData,
    ) -> Result<ProjectResult, project_uc::CreateProjectError> {
        Err(project_uc::CreateProjectError::RepositoryError(
            NOT_USED.to_string(),
        ))
    }
}

struct StubGetProjects;

#[async_trait]
impl project_uc::GetProjectsUseCase for StubGetProjects {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<ProjectResult>, project_uc::GetProjectsError> {
        Ok(vec![])
    }
}

struct StubGetSingleProject;

#[async_trait]
impl project_uc::GetSingleProjectUseCase for StubGetSingleProject {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
    ) -> Result<ProjectResult, project_uc::GetSingleProjectError> {
        Err(project_uc::GetSingleProjectError::NotFound)
    }
}

struct StubGetPublicProjects;

#[async_trait]
impl project_uc::GetPublicProjectsUseCase for StubGetPublicProjects {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<ProjectResult>, project_uc::GetPublicProjectsError> {
        Ok(vec![])
    }
}

struct StubUpdateProject;

#[async_trait]
impl project_uc::UpdateProjectUseCase for StubUpdateProject {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
        _data: UpdateProjectData,
    ) -> Result<ProjectResult, project_uc::UpdateProjectError> {
        Err(project_uc::UpdateProjectError::NotFound)
    }
}

struct StubPatchProject;

#[async_trait]
impl project_uc::PatchProjectUseCase for StubPatchProject {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
        _data: PatchProjectData,
    ) -> Result<ProjectResult, project_uc::PatchProjectError> {
        Err(project_uc::PatchProjectError::NotFound)
    }
}

struct StubDeleteProject;

#[async_trait]
impl project_uc::DeleteProjectUseCase for StubDeleteProject {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
    ) -> Result<(), project_uc::DeleteProjectError> {
        Err(project_uc::DeleteProjectError::NotFound)
    }
}

pub fn stub_project_use_cases() -> ProjectUseCases {
    ProjectUseCases {
        create: Arc::new(StubCreateProject),
        get_list: Arc::new(StubGetProjects),
        get_single: Arc::new(StubGetSingleProject),
        get_public_list: Arc::new(StubGetPublicProjects),
        update: Arc::new(StubUpdateProject),
        patch: Arc::new(StubPatchProject),
        delete: Arc::new(StubDeleteProject),
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill stubs
// ──────────────────────────────────────────────────────────
//

struct StubListSkills;

#[async_trait]
impl skill_uc::ListSkillsUseCase for StubListSkills {
    async fn execute(&self, _owner: UserId) -> Result<Vec<SkillResult>, skill_uc::ListSkillsError> {
        Ok(vec![])
    }
}

struct StubCreateSkill;

#[async_trait]
impl skill_uc::CreateSkillUseCase for StubCreateSkill {
    async fn execute(
        &self,
        _owner: UserId,
        _command: skill_uc::SkillCommand,
    ) -> Result<SkillResult, skill_uc::CreateSkillError> {
        Err(skill_uc::CreateSkillError::RepositoryError(
            NOT_USED.to_string(),
        ))
    }
}

struct StubGetSkill;

#[async_trait]
impl skill_uc::GetSkillUseCase for StubGetSkill {
    async fn execute(
        &self,
        _owner: UserId,
        _skill_id: Uuid,
    ) -> Result<SkillResult, skill_uc::GetSkillError> {
        Err(skill_uc::GetSkillError::NotFound)
    }
}

struct StubUpdateSkill;

#[async_trait]
impl skill_uc::UpdateSkillUseCase for StubUpdateSkill {
    async fn execute(
        &self,
        _owner: UserId,
        _skill_id: Uuid,
        _command: skill_uc::SkillCommand,
    ) -> Result<SkillResult, skill_uc::UpdateSkillError> {
        Err(skill_uc::UpdateSkillError::NotFound)
    }
}

struct StubDeleteSkill;

#[async_trait]
impl skill_uc::DeleteSkillUseCase for StubDeleteSkill {
    async fn execute(
        &self,
        _owner: UserId,
        _skill_id: Uuid,
    ) -> Result<(), skill_uc::DeleteSkillError> {
        Err(skill_uc::DeleteSkillError::NotFound)
    }
}

pub fn stub_skill_use_cases() -> SkillUseCases {
    SkillUseCases {
        list: Arc::new(StubListSkills),
        create: Arc::new(StubCreateSkill),
        get: Arc::new(StubGetSkill),
        update: Arc::new(StubUpdateSkill),
        delete: Arc::new(StubDeleteSkill),
    }
}

//
// ──────────────────────────────────────────────────────────
// Education stubs
// ──────────────────────────────────────────────────────────
//

struct StubListEducation;

#[async_trait]
impl education_uc::ListEducationUseCase for StubListEducation {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<EducationResult>, education_uc::ListEducationError> {
        Ok(vec![])
    }
}

struct StubCreateEducation;

#[async_trait]
impl education_uc::CreateEducationUseCase for StubCreateEducation {
    async fn execute(
        &self,
        _owner: UserId,
        _command: education_uc::EducationCommand,
    ) -> Result<EducationResult, education_uc::CreateEducationError> {
        Err(education_uc::CreateEducationError::RepositoryError(
            NOT_USED.to_string(),
        ))
    }
}

struct StubGetEducation;

#[async_trait]
impl education_uc::GetEducationUseCase for StubGetEducation {
    async fn execute(
        &self,
        _owner: UserId,
        _entry_id: Uuid,
    ) -> Result<EducationResult, education_uc::GetEducationError> {
        Err(education_uc::GetEducationError::NotFound)
    }
}

struct StubUpdateEducation;

#[async_trait]
impl education_uc::UpdateEducationUseCase for StubUpdateEducation {
    async fn execute(
        &self,
        _owner: UserId,
        _entry_id: Uuid,
        _command: education_uc::EducationCommand,
    ) -> Result<EducationResult, education_uc::UpdateEducationError> {
        Err(education_uc::UpdateEducationError::NotFound)
    }
}

struct StubDeleteEducation;

#[async_trait]
impl education_uc::DeleteEducationUseCase for StubDeleteEducation {
    async fn execute(
        &self,
        _owner: UserId,
        _entry_id: Uuid,
    ) -> Result<(), education_uc::DeleteEducationError> {
        Err(education_uc::DeleteEducationError::NotFound)
    }
}

pub fn stub_education_use_cases() -> EducationUseCases {
    EducationUseCases {
        list: Arc::new(StubListEducation),
        create: Arc::new(StubCreateEducation),
        get: Arc::new(StubGetEducation),
        update: Arc::new(StubUpdateEducation),
        delete: Arc::new(StubDeleteEducation),
    }
}

//
// ──────────────────────────────────────────────────────────
// Language stubs
// ──────────────────────────────────────────────────────────
//

struct StubListLanguages;

#[async_trait]
impl language_uc::ListLanguagesUseCase for StubListLanguages {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<LanguageResult>, language_uc::ListLanguagesError> {
        Ok(vec![])
    }
}

struct StubCreateLanguage;

#[async_trait]
impl language_uc::CreateLanguageUseCase for StubCreateLanguage {
    async fn execute(
        &self,
        _owner: UserId,
        _command: language_uc::LanguageCommand,
    ) -> Result<LanguageResult, language_uc::CreateLanguageError> {
        Err(language_uc::CreateLanguageError::RepositoryError(
            NOT_USED.to_string(),
        ))
    }
}

struct StubGetLanguage;

#[async_trait]
impl language_uc::GetLanguageUseCase for StubGetLanguage {
    async fn execute(
        &self,
        _owner: UserId,
        _language_id: Uuid,
    ) -> Result<LanguageResult, language_uc::GetLanguageError> {
        Err(language_uc::GetLanguageError::NotFound)
    }
}

struct StubUpdateLanguage;

#[async_trait]
impl language_uc::UpdateLanguageUseCase for StubUpdateLanguage {
    async fn execute(
        &self,
        _owner: UserId,
        _language_id: Uuid,
        _command: language_uc::LanguageCommand,
    ) -> Result<LanguageResult, language_uc::UpdateLanguageError> {
        Err(language_uc::UpdateLanguageError::NotFound)
    }
}

struct StubDeleteLanguage;

#[async_trait]
impl language_uc::DeleteLanguageUseCase for StubDeleteLanguage {
    async fn execute(
        &self,
        _owner: UserId,
        _language_id: Uuid,
    ) -> Result<(), language_uc::DeleteLanguageError> {
        Err(language_uc::DeleteLanguageError::NotFound)
    }
}

pub fn stub_language_use_cases() -> LanguageUseCases {
    LanguageUseCases {
        list: Arc::new(StubListLanguages),
        create: Arc::new(StubCreateLanguage),
        get: Arc::new(StubGetLanguage),
        update: Arc::new(StubUpdateLanguage),
        delete: Arc::new(StubDeleteLanguage),
    }
}

//
// ──────────────────────────────────────────────────────────
// Social link stubs
// ──────────────────────────────────────────────────────────
//

struct StubListSocialLinks;

#[async_trait]
impl social_uc::ListSocialLinksUseCase for StubListSocialLinks {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<SocialLinkResult>, social_uc::ListSocialLinksError> {
        Ok(vec![])
    }
}

struct StubCreateSocialLink;

#[async_trait]
impl social_uc::CreateSocialLinkUseCase for StubCreateSocialLink {
    async fn execute(
        &self,
        _owner: UserId,
        _command: social_uc::SocialLinkCommand,
    ) -> Result<SocialLinkResult, social_uc::CreateSocialLinkError> {
        Err(social_uc::CreateSocialLinkError::RepositoryError(
            NOT_USED.to_string(),
        ))
    }
}

struct StubGetSocialLink;

#[async_trait]
impl social_uc::GetSocialLinkUseCase for StubGetSocialLink {
    async fn execute(
        &self,
        _owner: UserId,
        _link_id: Uuid,
    ) -> Result<SocialLinkResult, social_uc::GetSocialLinkError> {
        Err(social_uc::GetSocialLinkError::NotFound)
    }
}

struct StubUpdateSocialLink;

#[async_trait]
impl social_uc::UpdateSocialLinkUseCase for StubUpdateSocialLink {
    async fn execute(
        &self,
        _owner: UserId,
        _link_id: Uuid,
        _command: social_uc::SocialLinkCommand,
    ) -> Result<SocialLinkResult, social_uc::UpdateSocialLinkError> {
        Err(social_uc::UpdateSocialLinkError::NotFound)
    }
}

struct StubDeleteSocialLink;

#[async_trait]
impl social_uc::DeleteSocialLinkUseCase for StubDeleteSocialLink {
    async fn execute(
        &self,
        _owner: UserId,
        _link_id: Uuid,
    ) -> Result<(), social_uc::DeleteSocialLinkError> {
        Err(social_uc::DeleteSocialLinkError::NotFound)
    }
}

pub fn stub_social_link_use_cases() -> SocialLinkUseCases {
    SocialLinkUseCases {
        list: Arc::new(StubListSocialLinks),
        create: Arc::new(StubCreateSocialLink),
        get: Arc::new(StubGetSocialLink),
        update: Arc::new(StubUpdateSocialLink),
        delete: Arc::new(StubDeleteSocialLink),
    }
}

//
// ──────────────────────────────────────────────────────────
// Preference stubs
// ──────────────────────────────────────────────────────────
//

struct StubGetPreferences;

#[async_trait]
impl preference_uc::GetPreferencesUseCase for StubGetPreferences {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<PreferenceResult, preference_uc::GetPreferencesError> {
        Err(preference_uc::GetPreferencesError::NotFound)
    }
}

struct StubUpsertPreferences;

#[async_trait]
impl preference_uc::UpsertPreferencesUseCase for StubUpsertPreferences {
    async fn execute(
        &self,
        _owner: UserId,
        _command: preference_uc::PreferenceCommand,
    ) -> Result<PreferenceResult, preference_uc::UpsertPreferencesError> {
        Err(preference_uc::UpsertPreferencesError::RepositoryError(
            NOT_USED.to_string(),
        ))
    }
}

struct StubFindSimilarUsers;

#[async_trait]
impl preference_uc::FindSimilarUsersUseCase for StubFindSimilarUsers {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<SimilarUser>, preference_uc::FindSimilarUsersError> {
        Ok(vec![])
    }
}

pub fn stub_preference_use_cases() -> PreferenceUseCases {
    PreferenceUseCases {
        get: Arc::new(StubGetPreferences),
        upsert: Arc::new(StubUpsertPreferences),
        find_similar: Arc::new(StubFindSimilarUsers),
    }
}
