//! `migrate` subcommand.
//!
//! Applies the embedded application migrations and creates the session
//! table. The web server does not migrate at startup; run this first.

use tower_sessions_sqlx_store::SqliteStore;

use shoplite_web::config::{ConfigError, SiteConfig};
use shoplite_web::db;

/// Errors from the migrate command.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Apply all pending migrations.
pub async fn run() -> Result<(), MigrateError> {
    dotenvy::dotenv().ok();

    let config = SiteConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;

    db::MIGRATOR.run(&pool).await?;
    SqliteStore::new(pool.clone()).migrate().await?;

    tracing::info!("migrations applied");
    Ok(())
}
