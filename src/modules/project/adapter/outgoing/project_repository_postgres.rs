use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::projects::{self, ActiveModel, Column, Entity};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchField, PatchProjectData, ProjectRepository, ProjectRepositoryError,
    ProjectResult, UpdateProjectData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let owner_uuid: Uuid = data.owner.into();
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_uuid),
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug.trim().to_lowercase()),
            description: Set(data.description),
            tech_stack: Set(to_json(&data.tech_stack)?),
            screenshots: Set(to_json(&data.screenshots)?),
            repo_url: Set(data.repo_url),
            live_demo_url: Set(data.live_demo_url),
            featured: Set(data.featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        model_to_result(result)
    }

    async fn update_project(
        &self,
        owner: UserId,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let existing = Entity::find_by_id(project_id)
            .filter(Column::OwnerId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.title = Set(data.title.trim().to_string());
        model.description = Set(data.description);
        model.tech_stack = Set(to_json(&data.tech_stack)?);
        model.screenshots = Set(to_json(&data.screenshots)?);
        model.repo_url = Set(data.repo_url);
        model.live_demo_url = Set(data.live_demo_url);
        model.featured = Set(data.featured);

        let result = model.update(&*self.db).await.map_err(map_db_err)?;

        model_to_result(result)
    }

    async fn patch_project(
        &self,
        owner: UserId,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let PatchField::Value(desc) = data.description {
            model.description = Set(desc);
        }

        if let PatchField::Value(tech) = data.tech_stack {
            model.tech_stack = Set(to_json(&tech)?);
        }

        if let PatchField::Value(screens) = data.screenshots {
            model.screenshots = Set(to_json(&screens)?);
        }

        match data.repo_url {
            PatchField::Unset => {}
            PatchField::Null => model.repo_url = Set(None),
            PatchField::Value(url) => model.repo_url = Set(Some(url)),
        }

        match data.live_demo_url {
            PatchField::Unset => {}
            PatchField::Null => model.live_demo_url = Set(None),
            PatchField::Value(url) => model.live_demo_url = Set(Some(url)),
        }

        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.tech_stack.is_set()
            || model.screenshots.is_set()
            || model.repo_url.is_set()
            || model.live_demo_url.is_set()
            || model.featured.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .filter(Column::OwnerId.eq(owner_uuid))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return model_to_result(result);
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .filter(Column::OwnerId.eq(owner_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_result(result)
    }

    async fn delete_project(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<(), ProjectRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(project_id))
            .filter(Column::OwnerId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(super) fn model_to_result(
    model: projects::Model,
) -> Result<ProjectResult, ProjectRepositoryError> {
    Ok(ProjectResult {
        id: model.id,
        owner: UserId::from(model.owner_id),
        title: model.title,
        slug: model.slug,
        description: model.description,
        tech_stack: from_json(&model.tech_stack)?,
        screenshots: from_json(&model.screenshots)?,
        repo_url: model.repo_url,
        live_demo_url: model.live_demo_url,
        featured: model.featured,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    })
}

fn to_json(values: &[String]) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(values)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json(value: &serde_json::Value) -> Result<Vec<String>, ProjectRepositoryError> {
    serde_json::from_value(value.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string();
    // The lower(slug) unique index
    if msg.contains("duplicate key") || msg.contains("idx_projects_slug_unique") {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_model(owner: Uuid) -> projects::Model {
        let now = Utc::now();
        projects::Model {
            id: Uuid::new_v4(),
            owner_id: owner,
            title: "Folio".to_string(),
            slug: "folio".to_string(),
            description: "Personal site".to_string(),
            tech_stack: serde_json::json!(["Rust", "Actix"]),
            screenshots: serde_json::json!([]),
            repo_url: None,
            live_demo_url: None,
            featured: true,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_create_project_maps_model() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_model(owner)]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_project(CreateProjectData {
                owner: UserId::from(owner),
                title: "Folio".to_string(),
                slug: "Folio".to_string(),
                description: "Personal site".to_string(),
                tech_stack: vec!["Rust".to_string(), "Actix".to_string()],
                screenshots: vec![],
                repo_url: None,
                live_demo_url: None,
                featured: true,
            })
            .await
            .unwrap();

        assert_eq!(result.slug, "folio");
        assert_eq!(result.tech_stack, vec!["Rust", "Actix"]);
    }

    #[tokio::test]
    async fn test_delete_missing_project_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .delete_project(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(ProjectRepositoryError::NotFound)));
    }
}
