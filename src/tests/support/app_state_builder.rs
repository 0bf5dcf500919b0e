use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::helpers::UserIdentityResolver;
use crate::modules::auth::application::use_cases::{
    fetch_profile::FetchProfileUseCase, login_user::LoginUserUseCase,
    register_user::RegisterUserUseCase, update_profile::UpdateProfileUseCase,
};
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::domain::achievements::Achievements;
use crate::modules::catalog::domain::extracurricular::Extracurriculars;
use crate::modules::catalog::domain::gallery::Gallery;
use crate::modules::catalog::domain::videos::Videos;
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::language::application::language_use_cases::LanguageUseCases;
use crate::modules::preference::application::preference_use_cases::PreferenceUseCases;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::social::application::social_link_use_cases::SocialLinkUseCases;
use crate::tests::support::stubs::*;
use crate::{AppState, CatalogState};

/// Builds an `AppState` where everything is stubbed; tests replace only
/// the use cases they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    catalog: CatalogState,
    projects: ProjectUseCases,
    skills: SkillUseCases,
    education: EducationUseCases,
    languages: LanguageUseCases,
    socials: SocialLinkUseCases,
    preferences: PreferenceUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
            },
            catalog: CatalogState {
                achievements: stub_catalog_use_cases::<Achievements>(),
                extracurriculars: stub_catalog_use_cases::<Extracurriculars>(),
                gallery: stub_catalog_use_cases::<Gallery>(),
                videos: stub_catalog_use_cases::<Videos>(),
            },
            projects: stub_project_use_cases(),
            skills: stub_skill_use_cases(),
            education: stub_education_use_cases(),
            languages: stub_language_use_cases(),
            socials: stub_social_link_use_cases(),
            preferences: stub_preference_use_cases(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_use_case(
        mut self,
        uc: impl RegisterUserUseCase + 'static,
    ) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_use_case(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile_use_case(
        mut self,
        uc: impl FetchProfileUseCase + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile_use_case(
        mut self,
        uc: impl UpdateProfileUseCase + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_achievements(mut self, bundle: CatalogUseCases<Achievements>) -> Self {
        self.catalog.achievements = bundle;
        self
    }

    pub fn with_extracurriculars(mut self, bundle: CatalogUseCases<Extracurriculars>) -> Self {
        self.catalog.extracurriculars = bundle;
        self
    }

    pub fn with_gallery(mut self, bundle: CatalogUseCases<Gallery>) -> Self {
        self.catalog.gallery = bundle;
        self
    }

    pub fn with_videos(mut self, bundle: CatalogUseCases<Videos>) -> Self {
        self.catalog.videos = bundle;
        self
    }

    pub fn with_projects(mut self, bundle: ProjectUseCases) -> Self {
        self.projects = bundle;
        self
    }

    pub fn with_skills(mut self, bundle: SkillUseCases) -> Self {
        self.skills = bundle;
        self
    }

    pub fn with_education(mut self, bundle: EducationUseCases) -> Self {
        self.education = bundle;
        self
    }

    pub fn with_languages(mut self, bundle: LanguageUseCases) -> Self {
        self.languages = bundle;
        self
    }

    pub fn with_socials(mut self, bundle: SocialLinkUseCases) -> Self {
        self.socials = bundle;
        self
    }

    pub fn with_preferences(mut self, bundle: PreferenceUseCases) -> Self {
        self.preferences = bundle;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            catalog: self.catalog,
            projects: self.projects,
            skills: self.skills,
            education: self.education,
            languages: self.languages,
            socials: self.socials,
            preferences: self.preferences,
            user_identity_resolver: UserIdentityResolver::new(Arc::new(DummyUserQuery)),
        })
    }
}
