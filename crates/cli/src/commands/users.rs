//! `create-user` subcommand.
//!
//! Registers an account through the same service the web registration
//! form uses, so validation and hashing behave identically.

use shoplite_web::config::{ConfigError, SiteConfig};
use shoplite_web::db;
use shoplite_web::services::auth::{AuthError, AuthService};

/// Errors from the create-user command.
#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("registration failed: {0}")]
    Auth(#[from] AuthError),
}

/// Register a user account from the command line.
pub async fn run(
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
) -> Result<(), CreateUserError> {
    dotenvy::dotenv().ok();

    let config = SiteConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;

    let service = AuthService::new(&pool);
    let user = service
        .register_with_password(email, first_name, last_name, password)
        .await?;

    tracing::info!(user_id = %user.id, email = %user.email, "created user");
    Ok(())
}
