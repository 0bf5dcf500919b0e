use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EducationEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EducationEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(EducationEntries::OwnerId).uuid().not_null())
                    .col(
                        ColumnDef::new(EducationEntries::School)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationEntries::Degree)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EducationEntries::FieldOfStudy).string_len(150))
                    .col(
                        ColumnDef::new(EducationEntries::StartYear)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EducationEntries::EndYear).small_integer())
                    .col(
                        ColumnDef::new(EducationEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EducationEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_education_entries_owner_id")
                            .from(EducationEntries::Table, EducationEntries::OwnerId)
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
                CREATE INDEX IF NOT EXISTS idx_education_entries_owner_id
                ON education_entries (owner_id, start_year DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_education_entries_updated_at
                BEFORE UPDATE ON education_entries
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
                DROP TRIGGER IF EXISTS update_education_entries_updated_at ON education_entries;
                DROP INDEX IF EXISTS idx_education_entries_owner_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EducationEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EducationEntries {
    Table,
    Id,
    OwnerId,
    School,
    Degree,
    FieldOfStudy,
    StartYear,
    EndYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
