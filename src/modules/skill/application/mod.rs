pub mod ports;
pub mod services;
pub mod skill_use_cases;
