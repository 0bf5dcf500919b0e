use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod education_entries {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "education_entries")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_name = "owner_id", column_type = "Uuid")]
        pub owner_id: Uuid,

        #[sea_orm(column_type = "Text", string_len = 150)]
        pub school: String,

        #[sea_orm(column_type = "Text", string_len = 150)]
        pub degree: String,

        #[sea_orm(nullable)]
        pub field_of_study: Option<String>,

        pub start_year: i16,

        #[sea_orm(nullable)]
        pub end_year: Option<i16>,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !insert {
                self.updated_at = Set(Utc::now().into());
            }

            Ok(self)
        }
    }
}
