pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_content_entries_table;
mod m20260301_000002_seed_content_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_content_entries_table::Migration),
            Box::new(m20260301_000002_seed_content_entries::Migration),
        ]
    }
}
