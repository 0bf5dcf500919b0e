pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::modules::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::helpers::UserIdentityResolver;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::use_cases::{
    fetch_profile::FetchProfileService, login_user::LoginUserService,
    register_user::RegisterUserService, update_profile::UpdateProfileService,
};

use crate::modules::catalog::adapter::outgoing::item_store_postgres::ItemStorePostgres;
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::domain::achievements::Achievements;
use crate::modules::catalog::domain::extracurricular::Extracurriculars;
use crate::modules::catalog::domain::gallery::Gallery;
use crate::modules::catalog::domain::videos::Videos;

use crate::modules::education::adapter::outgoing::education_repository_postgres::EducationRepositoryPostgres;
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::education::application::services::education_services::EducationServices;

use crate::modules::language::adapter::outgoing::language_repository_postgres::LanguageRepositoryPostgres;
use crate::modules::language::application::language_use_cases::LanguageUseCases;
use crate::modules::language::application::services::language_services::LanguageServices;

use crate::modules::preference::adapter::outgoing::preference_repository_postgres::PreferenceRepositoryPostgres;
use crate::modules::preference::application::preference_use_cases::PreferenceUseCases;
use crate::modules::preference::application::services::preference_services::PreferenceServices;

use crate::modules::project::adapter::outgoing::project_query_postgres::ProjectQueryPostgres;
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::services::project_services::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetPublicProjectsService,
    GetSingleProjectService, PatchProjectService, UpdateProjectService,
};

use crate::modules::skill::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::modules::skill::application::services::skill_services::SkillServices;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;

use crate::modules::social::adapter::outgoing::social_link_repository_postgres::SocialLinkRepositoryPostgres;
use crate::modules::social::application::services::social_link_services::SocialLinkServices;
use crate::modules::social::application::social_link_use_cases::SocialLinkUseCases;

use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

/// One use-case bundle per nested-category item family.
#[derive(Clone)]
pub struct CatalogState {
    pub achievements: CatalogUseCases<Achievements>,
    pub extracurriculars: CatalogUseCases<Extracurriculars>,
    pub gallery: CatalogUseCases<Gallery>,
    pub videos: CatalogUseCases<Videos>,
}

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub catalog: CatalogState,
    pub projects: ProjectUseCases,
    pub skills: SkillUseCases,
    pub education: EducationUseCases,
    pub languages: LanguageUseCases,
    pub socials: SocialLinkUseCases,
    pub preferences: PreferenceUseCases,
    pub user_identity_resolver: UserIdentityResolver,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth wiring
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            Arc::new(jwt_service.clone()),
        )),
        fetch_profile: Arc::new(FetchProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo)),
    };

    let user_identity_resolver = UserIdentityResolver::new(Arc::new(user_query));

    // Catalog wiring: four families on one item store
    let item_store = ItemStorePostgres::new(Arc::clone(&db_arc));
    let catalog = CatalogState {
        achievements: CatalogUseCases::<Achievements>::wire(item_store.clone()),
        extracurriculars: CatalogUseCases::<Extracurriculars>::wire(item_store.clone()),
        gallery: CatalogUseCases::<Gallery>::wire(item_store.clone()),
        videos: CatalogUseCases::<Videos>::wire(item_store),
    };

    // Projects
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let projects = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
        get_public_list: Arc::new(GetPublicProjectsService::new(project_query)),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        patch: Arc::new(PatchProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    // Profile sections
    let skill_services = Arc::new(SkillServices::new(SkillRepositoryPostgres::new(
        Arc::clone(&db_arc),
    )));
    let skills = SkillUseCases {
        list: skill_services.clone(),
        create: skill_services.clone(),
        get: skill_services.clone(),
        update: skill_services.clone(),
        delete: skill_services,
    };

    let education_services = Arc::new(EducationServices::new(EducationRepositoryPostgres::new(
        Arc::clone(&db_arc),
    )));
    let education = EducationUseCases {
        list: education_services.clone(),
        create: education_services.clone(),
        get: education_services.clone(),
        update: education_services.clone(),
        delete: education_services,
    };

    let language_services = Arc::new(LanguageServices::new(LanguageRepositoryPostgres::new(
        Arc::clone(&db_arc),
    )));
    let languages = LanguageUseCases {
        list: language_services.clone(),
        create: language_services.clone(),
        get: language_services.clone(),
        update: language_services.clone(),
        delete: language_services,
    };

    let social_services = Arc::new(SocialLinkServices::new(SocialLinkRepositoryPostgres::new(
        Arc::clone(&db_arc),
    )));
    let socials = SocialLinkUseCases {
        list: social_services.clone(),
        create: social_services.clone(),
        get: social_services.clone(),
        update: social_services.clone(),
        delete: social_services,
    };

    let preference_services = Arc::new(PreferenceServices::new(
        PreferenceRepositoryPostgres::new(Arc::clone(&db_arc)),
    ));
    let preferences = PreferenceUseCases {
        get: preference_services.clone(),
        upsert: preference_services.clone(),
        find_similar: preference_services,
    };

    let state = AppState {
        auth,
        catalog,
        projects,
        skills,
        education,
        languages,
        socials,
        preferences,
        user_identity_resolver,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Auth / users
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::update_profile_handler);

    // Achievements
    use crate::modules::catalog::adapter::incoming::web::routes::achievements;
    cfg.service(achievements::list_achievements_handler);
    cfg.service(achievements::list_achievements_by_type_handler);
    cfg.service(achievements::create_achievement_handler);
    cfg.service(achievements::get_achievement_handler);
    cfg.service(achievements::update_achievement_handler);
    cfg.service(achievements::delete_achievement_handler);

    // Extracurriculars
    use crate::modules::catalog::adapter::incoming::web::routes::extracurriculars;
    cfg.service(extracurriculars::list_extracurriculars_handler);
    cfg.service(extracurriculars::list_extracurriculars_by_type_handler);
    cfg.service(extracurriculars::create_extracurricular_handler);
    cfg.service(extracurriculars::get_extracurricular_handler);
    cfg.service(extracurriculars::update_extracurricular_handler);
    cfg.service(extracurriculars::delete_extracurricular_handler);

    // Gallery
    use crate::modules::catalog::adapter::incoming::web::routes::gallery;
    cfg.service(gallery::list_gallery_handler);
    cfg.service(gallery::list_gallery_by_type_handler);
    cfg.service(gallery::create_gallery_item_handler);
    cfg.service(gallery::get_gallery_item_handler);
    cfg.service(gallery::update_gallery_item_handler);
    cfg.service(gallery::delete_gallery_item_handler);

    // Videos
    use crate::modules::catalog::adapter::incoming::web::routes::videos;
    cfg.service(videos::list_videos_handler);
    cfg.service(videos::list_videos_by_type_handler);
    cfg.service(videos::create_video_handler);
    cfg.service(videos::get_video_handler);
    cfg.service(videos::update_video_handler);
    cfg.service(videos::delete_video_handler);

    // Projects
    use crate::modules::project::adapter::incoming::web::routes as project_routes;
    cfg.service(project_routes::create_project_handler);
    cfg.service(project_routes::get_projects_handler);
    cfg.service(project_routes::get_single_project_handler);
    cfg.service(project_routes::update_project_handler);
    cfg.service(project_routes::patch_project_handler);
    cfg.service(project_routes::delete_project_handler);
    cfg.service(project_routes::get_public_projects_handler);

    // Skills
    use crate::modules::skill::adapter::incoming::web::routes as skill_routes;
    cfg.service(skill_routes::get_skills_handler);
    cfg.service(skill_routes::create_skill_handler);
    cfg.service(skill_routes::get_skill_handler);
    cfg.service(skill_routes::update_skill_handler);
    cfg.service(skill_routes::delete_skill_handler);

    // Education
    use crate::modules::education::adapter::incoming::web::routes as education_routes;
    cfg.service(education_routes::get_education_handler);
    cfg.service(education_routes::create_education_handler);
    cfg.service(education_routes::get_education_entry_handler);
    cfg.service(education_routes::update_education_handler);
    cfg.service(education_routes::delete_education_handler);

    // Languages
    use crate::modules::language::adapter::incoming::web::routes as language_routes;
    cfg.service(language_routes::get_languages_handler);
    cfg.service(language_routes::create_language_handler);
    cfg.service(language_routes::get_language_handler);
    cfg.service(language_routes::update_language_handler);
    cfg.service(language_routes::delete_language_handler);

    // Socials
    use crate::modules::social::adapter::incoming::web::routes as social_routes;
    cfg.service(social_routes::get_social_links_handler);
    cfg.service(social_routes::create_social_link_handler);
    cfg.service(social_routes::get_social_link_handler);
    cfg.service(social_routes::update_social_link_handler);
    cfg.service(social_routes::delete_social_link_handler);

    // Preferences (the /similar route must land before /{id}-style
    // patterns if one is ever added)
    use crate::modules::preference::adapter::incoming::web::routes as preference_routes;
    cfg.service(preference_routes::get_similar_users_handler);
    cfg.service(preference_routes::get_preferences_handler);
    cfg.service(preference_routes::put_preferences_handler);

    // OpenAPI
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
