//! Shared fixtures for unit tests.

use sea_orm::DatabaseConnection;

use crate::config::DatabaseConfig;
use crate::db;

/// Fresh in-memory SQLite database with the schema in place.
pub async fn memory_db() -> DatabaseConnection {
    let conn = db::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    db::ensure_schema(&conn).await.expect("Failed to create schema");
    conn
}
