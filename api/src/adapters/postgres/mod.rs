//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod webinar_repo;


use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::StorageError;

pub use webinar_repo::PostgresWebinarRepository;

/// Schema applied by `run_migrations`; every statement is idempotent.
const SCHEMA: &str = include_str!("../../../migrations/0001_create_webinars.sql");

/// Create the tables the adapters rely on if they do not exist yet
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), StorageError> {
    db.execute_unprepared(SCHEMA)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?;

    Ok(())
}
