//! Database layer.
//!
//! Repositories wrap a [`SqlitePool`] and expose typed operations on the
//! tables they own. Migrations are embedded in the binary and applied by
//! the `shoplite migrate` CLI command, not at server startup.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub mod products;
pub mod users;

pub use products::ProductRepository;
pub use users::UserRepository;

/// Embedded migrations for the application tables.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The requested row does not exist.
    #[error("not found")]
    NotFound,

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Create a connection pool for the given database URL.
///
/// # Errors
///
/// Returns `sqlx::Error` if the database cannot be opened.
pub async fn create_pool(database_url: &SecretString) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// In-memory pool with all migrations applied, for unit tests.
///
/// A single connection keeps the in-memory database alive for the life of
/// the pool.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}
