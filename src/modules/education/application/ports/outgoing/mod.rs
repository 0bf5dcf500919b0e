pub mod education_repository;

pub use education_repository::{
    EducationData, EducationRepository, EducationRepositoryError, EducationResult,
};
