pub mod education_use_cases;
pub mod ports;
pub mod services;
