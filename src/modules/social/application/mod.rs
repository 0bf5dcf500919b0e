pub mod ports;
pub mod services;
pub mod social_link_use_cases;
