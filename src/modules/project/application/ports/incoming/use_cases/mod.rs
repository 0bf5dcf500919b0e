mod create_project;
mod delete_project;
mod get_projects;
mod get_public_projects;
mod get_single_project;
mod patch_project;
pub mod project_content;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_public_projects::{GetPublicProjectsError, GetPublicProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use patch_project::{PatchProjectError, PatchProjectUseCase};
pub use project_content::{normalize_slug, ProjectContent, ProjectContentError, SlugError};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
