use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::skill::application::ports::outgoing::{SkillData, SkillResult};

//
// ──────────────────────────────────────────────────────────
// Command (validation happens here)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum SkillCommandError {
    EmptyName,
    NameTooLong,
    LevelOutOfRange,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for SkillCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCommandError::EmptyName => write!(f, "Skill name cannot be empty"),
            SkillCommandError::NameTooLong => {
                write!(f, "Skill name must not exceed 100 characters")
            }
            SkillCommandError::LevelOutOfRange => {
                write!(f, "Skill level must be between 0 and 100")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillCommand(SkillData);

impl SkillCommand {
    pub fn new(
        name: String,
        level: i16,
        category: Option<String>,
    ) -> Result<Self, SkillCommandError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SkillCommandError::EmptyName);
        }
        if name.len() > 100 {
            return Err(SkillCommandError::NameTooLong);
        }
        if !(0..=100).contains(&level) {
            return Err(SkillCommandError::LevelOutOfRange);
        }

        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self(SkillData {
            name,
            level,
            category,
        }))
    }

    pub fn into_data(self) -> SkillData {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ListSkillsError {
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListSkillsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSkillsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<SkillResult>, ListSkillsError>;
}

#[derive(Debug, Clone)]
pub enum CreateSkillError {
    NameAlreadyExists,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for CreateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateSkillError::NameAlreadyExists => write!(f, "skill already exists"),
            CreateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: SkillCommand,
    ) -> Result<SkillResult, CreateSkillError>;
}

#[derive(Debug, Clone)]
pub enum GetSkillError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSkillError::NotFound => write!(f, "skill not found"),
            GetSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetSkillUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, skill_id: Uuid) -> Result<SkillResult, GetSkillError>;
}

#[derive(Debug, Clone)]
pub enum UpdateSkillError {
    NotFound,
    NameAlreadyExists,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSkillError::NotFound => write!(f, "skill not found"),
            UpdateSkillError::NameAlreadyExists => write!(f, "skill already exists"),
            UpdateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        skill_id: Uuid,
        command: SkillCommand,
    ) -> Result<SkillResult, UpdateSkillError>;
}

#[derive(Debug, Clone)]
pub enum DeleteSkillError {
    NotFound,
    RepositoryError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for DeleteSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteSkillError::NotFound => write!(f, "skill not found"),
            DeleteSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, skill_id: Uuid) -> Result<(), DeleteSkillError>;
}
