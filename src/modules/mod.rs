pub mod auth;
pub mod catalog;
pub mod education;
pub mod language;
pub mod preference;
pub mod project;
pub mod skill;
pub mod social;
