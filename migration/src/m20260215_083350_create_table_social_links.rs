use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SocialLinks::OwnerId).uuid().not_null())
                    .col(
                        ColumnDef::new(SocialLinks::Platform)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocialLinks::Url).text().not_null())
                    .col(ColumnDef::new(SocialLinks::Label).string_len(100))
                    .col(
                        ColumnDef::new(SocialLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SocialLinks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_links_owner_id")
                            .from(SocialLinks::Table, SocialLinks::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_social_links_owner_id
                ON social_links (owner_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_social_links_updated_at
                BEFORE UPDATE ON social_links
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_social_links_updated_at ON social_links;
                DROP INDEX IF EXISTS idx_social_links_owner_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    OwnerId,
    Platform,
    Url,
    Label,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
