pub mod language_repository;

pub use language_repository::{
    LanguageData, LanguageRepository, LanguageRepositoryError, LanguageResult, Proficiency,
};
