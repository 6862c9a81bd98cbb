//! Session layer configuration.
//!
//! Sessions live in SQLite via `tower-sessions`, keyed by a browser cookie.
//! The backing table is created by the `shoplite migrate` CLI command.

use sqlx::SqlitePool;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "sessionid";

/// Sessions expire after two weeks of inactivity.
const SESSION_TTL_DAYS: i64 = 14;

/// Build the session middleware layer backed by the given pool.
pub fn create_session_layer(pool: &SqlitePool) -> SessionManagerLayer<SqliteStore> {
    let store = SqliteStore::new(pool.clone());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_TTL_DAYS)))
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
