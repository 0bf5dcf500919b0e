pub mod project_services;
