pub mod language_services;
