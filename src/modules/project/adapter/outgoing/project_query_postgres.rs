use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::project_repository_postgres::model_to_result;
use super::sea_orm_entity::projects::{Column, Entity};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        let owner_uuid: Uuid = owner.into();

        let models = Entity::find()
            .filter(Column::OwnerId.eq(owner_uuid))
            // Featured first, then newest
            .order_by_desc(Column::Featured)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|m| model_to_result(m).map_err(|e| ProjectQueryError::DatabaseError(e.to_string())))
            .collect()
    }

    async fn find_for_owner(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Option<ProjectResult>, ProjectQueryError> {
        let owner_uuid: Uuid = owner.into();

        let model = Entity::find_by_id(project_id)
            .filter(Column::OwnerId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| model_to_result(m).map_err(|e| ProjectQueryError::DatabaseError(e.to_string())))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(owner: Uuid) -> projects::Model {
        let now = Utc::now();
        projects::Model {
            id: Uuid::new_v4(),
            owner_id: owner,
            title: "Folio".to_string(),
            slug: "folio".to_string(),
            description: "Personal site".to_string(),
            tech_stack: serde_json::json!(["Rust"]),
            screenshots: serde_json::json!(["https://cdn.example.com/a.png"]),
            repo_url: None,
            live_demo_url: None,
            featured: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_list_for_owner_maps_rows() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_model(owner)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let projects = query.list_for_owner(UserId::from(owner)).await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(
            projects[0].screenshots,
            vec!["https://cdn.example.com/a.png"]
        );
    }

    #[tokio::test]
    async fn test_find_for_owner_absent_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<projects::Model>::new()])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query
            .find_for_owner(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
