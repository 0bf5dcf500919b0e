pub use sea_orm_migration::prelude::*;

mod m20260214_093012_create_users_table;
mod m20260214_094155_create_table_projects;
mod m20260214_095310_create_table_catalog_items;
mod m20260215_081422_create_table_skills;
mod m20260215_082045_create_table_education_entries;
mod m20260215_082716_create_table_languages;
mod m20260215_083350_create_table_social_links;
mod m20260216_071208_create_table_preferences;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260214_093012_create_users_table::Migration),
            Box::new(m20260214_094155_create_table_projects::Migration),
            Box::new(m20260214_095310_create_table_catalog_items::Migration),
            Box::new(m20260215_081422_create_table_skills::Migration),
            Box::new(m20260215_082045_create_table_education_entries::Migration),
            Box::new(m20260215_082716_create_table_languages::Migration),
            Box::new(m20260215_083350_create_table_social_links::Migration),
            Box::new(m20260216_071208_create_table_preferences::Migration),
        ]
    }
}
