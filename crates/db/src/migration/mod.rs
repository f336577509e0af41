//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration and built with the schema
//! builder, so the same migration runs on PostgreSQL and on SQLite.

pub use sea_orm_migration::prelude::*;

mod m20240301_000001_auth_tables;
mod m20240301_000002_condo_tables;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_auth_tables::Migration),
            Box::new(m20240301_000002_condo_tables::Migration),
        ]
    }
}
