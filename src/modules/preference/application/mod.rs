pub mod matching;
pub mod ports;
pub mod preference_use_cases;
pub mod services;
