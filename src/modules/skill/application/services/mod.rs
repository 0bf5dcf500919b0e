pub mod skill_services;
