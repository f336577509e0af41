//! Shared helpers for repository integration tests.

#![allow(dead_code)]

use condos_core::building::NewBuilding;
use condos_db::{
    BuildingRepository, CreateUserInput, Migrator, UserRepository,
    entities::{buildings, users},
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Opens a fresh in-memory database with the schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");
    db
}

/// Creates a test user with the given display name.
pub async fn create_test_user(db: &DatabaseConnection, name: &str) -> users::Model {
    UserRepository::new(db.clone())
        .create(CreateUserInput {
            name: Some(name.to_string()),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            image: None,
        })
        .await
        .expect("Failed to create test user")
}

/// Creates a building owned by `creator_id`.
pub async fn create_test_building(
    db: &DatabaseConnection,
    creator_id: &str,
    name: &str,
) -> buildings::Model {
    BuildingRepository::new(db.clone())
        .create(NewBuilding::named(name), creator_id)
        .await
        .expect("Failed to create test building")
}
