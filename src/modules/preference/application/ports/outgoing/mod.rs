pub mod preference_repository;

pub use preference_repository::{
    PeerPreferences, PreferenceData, PreferenceRepository, PreferenceRepositoryError,
    PreferenceResult, Theme,
};
