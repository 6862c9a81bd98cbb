//! Server binary entry point.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shoplite_web::config::SiteConfig;
use shoplite_web::db;
use shoplite_web::middleware::session::create_session_layer;
use shoplite_web::routes;
use shoplite_web::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shoplite_web=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env().expect("Failed to load configuration");

    // NOTE: migrations are applied by `shoplite migrate`, not at startup.
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let addr = config.socket_addr();
    let session_layer = create_session_layer(&pool);
    let state = AppState::new(config, pool);

    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Shoplite listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// Readiness probe: verifies database connectivity.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Resolves on SIGINT or SIGTERM, for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
