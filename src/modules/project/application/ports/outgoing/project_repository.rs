// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub owner: UserId,

    pub title: String,

    /// Slug is immutable: only set at creation time
    pub slug: String,

    pub description: String,

    /// Stored as JSONB (array of strings)
    pub tech_stack: Vec<String>,

    /// Stored as JSONB (array of strings)
    pub screenshots: Vec<String>,

    pub repo_url: Option<String>,
    pub live_demo_url: Option<String>,
    pub featured: bool,
}

/// Full replace for PUT; slug stays immutable.
#[derive(Debug, Clone)]
pub struct UpdateProjectData {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub screenshots: Vec<String>,
    pub repo_url: Option<String>,
    pub live_demo_url: Option<String>,
    pub featured: bool,
}

/// Patch semantics:
/// - title/description/featured: Unset => keep, Value => replace
/// - tech_stack/screenshots: Value(vec) => replace whole array (no merge)
/// - repo_url/live_demo_url: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default)]
pub struct PatchProjectData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub tech_stack: PatchField<Vec<String>>,
    pub screenshots: PatchField<Vec<String>>,
    pub repo_url: PatchField<String>,
    pub live_demo_url: PatchField<String>,
    pub featured: PatchField<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResult {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub screenshots: Vec<String>,
    pub repo_url: Option<String>,
    pub live_demo_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    /// Project doesn't exist OR doesn't belong to owner.
    #[error("Project not found")]
    NotFound,

    /// Global unique slug violated at INSERT time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side, projects table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    /// Full replace without a pre-read by the use case.
    async fn update_project(
        &self,
        owner: UserId,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    /// Patch without pre-read by the use case.
    /// Slug is immutable and MUST NOT be patchable.
    async fn patch_project(
        &self,
        owner: UserId,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn delete_project(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<(), ProjectRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    struct PatchProbe {
        #[serde(default)]
        repo_url: PatchField<String>,
    }

    #[test]
    fn test_patch_field_serde_tri_state() {
        let omitted: PatchProbe = serde_json::from_str("{}").unwrap();
        assert!(omitted.repo_url.is_unset());

        let null: PatchProbe = serde_json::from_str(r#"{"repo_url": null}"#).unwrap();
        assert!(null.repo_url.is_null());

        let value: PatchProbe =
            serde_json::from_str(r#"{"repo_url": "https://example.com"}"#).unwrap();
        assert_eq!(value.repo_url.as_value().unwrap(), "https://example.com");
    }
}
