//! Configuration for the Shoplite web server.
//!
//! All settings come from environment variables; a `.env` file is honored
//! in development. Loading never touches the database.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is present but has an unusable value.
    #[error("invalid value for {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable.
        name: &'static str,
        /// Human-readable parse failure.
        reason: String,
    },
}

/// Runtime configuration for the web server.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Database connection URL.
    pub database_url: SecretString,
    /// Address to bind to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but malformed. Absent
    /// variables fall back to defaults suitable for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = get_database_url();

        let host = get_env_or_default("SHOPLITE_HOST", "127.0.0.1")
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                name: "SHOPLITE_HOST",
                reason: e.to_string(),
            })?;

        let port = get_env_or_default("SHOPLITE_PORT", "8000")
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnvVar {
                name: "SHOPLITE_PORT",
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Socket address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Database URL lookup chain: `SHOPLITE_DATABASE_URL`, then `DATABASE_URL`,
/// then a SQLite file in the working directory.
fn get_database_url() -> SecretString {
    std::env::var("SHOPLITE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .unwrap_or_else(|_| "sqlite://shoplite.db?mode=rwc".to_string())
        .into()
}

/// Get an environment variable, or a default when unset.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
