//! Shared helpers for integration tests.
//!
//! Each test spawns the full application on an ephemeral port with its own
//! in-memory SQLite database, then drives it over HTTP like a browser
//! would.

use axum::Router;
use reqwest::Client;
use secrecy::SecretString;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower_sessions_sqlx_store::SqliteStore;

use shoplite_web::config::SiteConfig;
use shoplite_web::db;
use shoplite_web::middleware::session::create_session_layer;
use shoplite_web::routes;
use shoplite_web::state::AppState;

/// Connect an in-memory SQLite pool and apply all migrations.
///
/// A single connection keeps the in-memory database alive for the life of
/// the pool.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    SqliteStore::new(pool.clone())
        .migrate()
        .await
        .expect("Failed to create session table");

    pool
}

/// Spawn the application on an ephemeral port.
///
/// Returns the base URL of the running server and the pool backing it, so
/// tests can inspect persisted state directly.
pub async fn spawn_app() -> (String, SqlitePool) {
    let pool = test_pool().await;

    let config = SiteConfig {
        database_url: SecretString::from("sqlite::memory:".to_string()),
        host: [127, 0, 0, 1].into(),
        port: 0,
    };
    let state = AppState::new(config, pool.clone());
    let session_layer = create_session_layer(&pool);

    let app: Router = Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server crashed");
    });

    (format!("http://{addr}"), pool)
}

/// HTTP client with a cookie jar and no automatic redirect following, so
/// tests can assert on redirect responses directly.
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// The `Location` header of a redirect response.
pub fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .expect("Location header missing")
        .to_str()
        .expect("Location header is not valid UTF-8")
}
