pub mod education_services;
