pub mod skill_repository;

pub use skill_repository::{SkillData, SkillRepository, SkillRepositoryError, SkillResult};
