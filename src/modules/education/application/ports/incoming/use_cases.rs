use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::education::application::ports::outgoing::{EducationData, EducationResult};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum EducationCommandError {
    EmptySchool,
    EmptyDegree,
    StartYearOutOfRange,
    EndYearBeforeStart,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for EducationCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EducationCommandError::EmptySchool => write!(f, "School cannot be empty"),
            EducationCommandError::EmptyDegree => write!(f, "Degree cannot be empty"),
            EducationCommandError::StartYearOutOfRange => {
                write!(f, "Start year must be between 1900 and 2100")
            }
            EducationCommandError::EndYearBeforeStart => {
                write!(f, "End year cannot be before start year")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct EducationCommand(EducationData);

impl EducationCommand {
    pub fn new(
        school: String,
        degree: String,
        field_of_study: Option<String>,
        start_year: i16,
        end_year: Option<i16>,
    ) -> Result<Self, EducationCommandError> {
        let school = school.trim().to_string();
        if school.is_empty() {
            return Err(EducationCommandError::EmptySchool);
        }

        let degree = degree.trim().to_string();
        if degree.is_empty() {
            return Err(EducationCommandError::EmptyDegree);
        }

        if !(1900..=2100).contains(&start_year) {
            return Err(EducationCommandError::StartYearOutOfRange);
        }

        if let Some(end) = end_year {
            if end < start_year {
                return Err(EducationCommandError::EndYearBeforeStart);
            }
        }

        Ok(Self(EducationData {
            school,
            degree,
            field_of_study: field_of_study
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            start_year,
            end_year,
        }))
    }

    pub fn into_data(self) -> EducationData {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ListEducationError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListEducationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<EducationResult>, ListEducationError>;
}

#[derive(Debug, Clone)]
pub enum CreateEducationError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for CreateEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: EducationCommand,
    ) -> Result<EducationResult, CreateEducationError>;
}

#[derive(Debug, Clone)]
pub enum GetEducationError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetEducationError::NotFound => write!(f, "education entry not found"),
            GetEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<EducationResult, GetEducationError>;
}

#[derive(Debug, Clone)]
pub enum UpdateEducationError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateEducationError::NotFound => write!(f, "education entry not found"),
            UpdateEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        entry_id: Uuid,
        command: EducationCommand,
    ) -> Result<EducationResult, UpdateEducationError>;
}

#[derive(Debug, Clone)]
pub enum DeleteEducationError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for DeleteEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteEducationError::NotFound => write!(f, "education entry not found"),
            DeleteEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, entry_id: Uuid) -> Result<(), DeleteEducationError>;
}
