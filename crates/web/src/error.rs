//! Application-level error handling.
//!
//! [`AppError`] is the error type route handlers return. Its
//! [`IntoResponse`] impl maps each variant to an HTTP status and logs
//! internal failures without leaking details to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Convenience alias for handler results.
pub type Result<T> = std::result::Result<T, AppError>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Repository failure. `NotFound` maps to a 404 response.
    #[error(transparent)]
    Database(#[from] RepositoryError),

    /// Authentication failure that escaped the form-error flow.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Session store failure.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// A resource referenced by the request does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::Database(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::UserAlreadyExists) => StatusCode::CONFLICT,
            Self::Auth(AuthError::InvalidEmail(_) | AuthError::WeakPassword(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Database(_) | Self::Session(_) | Self::Auth(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            StatusCode::NOT_FOUND => "Not Found".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
