pub mod language_use_cases;
pub mod ports;
pub mod services;
