pub mod preference_services;
