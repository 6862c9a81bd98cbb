//! Shared application state.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::SiteConfig;

/// State shared by all route handlers.
///
/// Cloning is cheap; the contents live behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: SqlitePool,
}

impl AppState {
    /// Create the application state.
    #[must_use]
    pub fn new(config: SiteConfig, pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }
}
