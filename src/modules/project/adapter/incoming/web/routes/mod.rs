mod create_project;
mod delete_project;
mod get_projects;
mod get_public_projects;
mod get_single_project;
mod patch_project;
mod update_project;

pub use create_project::{create_project_handler, CreateProjectRequest};
pub use delete_project::delete_project_handler;
pub use get_projects::get_projects_handler;
pub use get_public_projects::get_public_projects_handler;
pub use get_single_project::get_single_project_handler;
pub use patch_project::{patch_project_handler, PatchProjectRequest};
pub use update_project::{update_project_handler, UpdateProjectRequest};
