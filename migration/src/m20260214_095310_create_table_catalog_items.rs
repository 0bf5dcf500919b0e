use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per categorized item. `domain` separates the four item
        // families (achievements, extracurriculars, gallery, videos);
        // `category` is the variant tag within a family. Variant-specific
        // fields live in the `details` JSONB payload, validated before insert.
        manager
            .create_table(
                Table::create()
                    .table(CatalogItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CatalogItems::OwnerId).uuid().not_null())
                    .col(
                        ColumnDef::new(CatalogItems::Domain)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogItems::Category)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CatalogItems::Name).string_len(200).not_null())
                    .col(ColumnDef::new(CatalogItems::Description).text())
                    .col(ColumnDef::new(CatalogItems::EventDate).date())
                    .col(
                        ColumnDef::new(CatalogItems::Details)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CatalogItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_catalog_items_owner_id")
                            .from(CatalogItems::Table, CatalogItems::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The two read paths: whole family, and one category of a family.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_catalog_items_owner_domain
                ON catalog_items (owner_id, domain, created_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_catalog_items_owner_domain_category
                ON catalog_items (owner_id, domain, category, created_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_catalog_items_updated_at
                BEFORE UPDATE ON catalog_items
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
                DROP TRIGGER IF EXISTS update_catalog_items_updated_at ON catalog_items;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_catalog_items_owner_domain;
                DROP INDEX IF EXISTS idx_catalog_items_owner_domain_category;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CatalogItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CatalogItems {
    Table,
    Id,
    OwnerId,
    Domain,
    Category,
    Name,
    Description,
    EventDate,
    Details,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
