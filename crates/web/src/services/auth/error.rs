//! Authentication error types.

use shoplite_core::EmailError;

use crate::db::RepositoryError;

/// Errors from the registration and login flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email or password did not match a stored account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that is already taken.
    #[error("a user with this email already exists")]
    UserAlreadyExists,

    /// The password does not meet the minimum requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// The email address failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Underlying storage failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing or verification failed internally.
    #[error("password hash error")]
    PasswordHash,
}
