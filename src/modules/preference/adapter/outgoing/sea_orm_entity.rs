use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod preferences {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "preferences")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_name = "owner_id", column_type = "Uuid", unique)]
        pub owner_id: Uuid,

        // Theme tag: light | dark | system
        #[sea_orm(column_type = "Text", string_len = 20)]
        pub theme: String,

        #[sea_orm(nullable)]
        pub accent_color: Option<String>,

        pub show_email: bool,

        pub newsletter: bool,

        // Array of lowercase interest tags, stored as JSONB
        #[sea_orm(column_type = "JsonBinary")]
        pub interests: Json,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
            from = "Column::OwnerId",
            to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
            on_update = "Cascade",
            on_delete = "Cascade"
        )]
        Users,
    }

    impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity>
        for Entity
    {
        fn to() -> RelationDef {
            Relation::Users.def()
        }
    }

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
