//! Password authentication.
//!
//! Registration and login against the local `users` table. Passwords are
//! hashed with Argon2id and a per-password random salt.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use shoplite_core::Email;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::db::{RepositoryError, UserRepository};
use crate::models::User;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration and login over the user repository.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user with an email and password.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidEmail`] if the email fails validation
    /// - [`AuthError::WeakPassword`] if the password is too short
    /// - [`AuthError::UserAlreadyExists`] if the email is taken
    #[instrument(skip(self, password))]
    pub async fn register_with_password(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create_with_password(&email, first_name, last_name, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, "registered new user");
        Ok(user)
    }

    /// Log a user in with an email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the email is unknown
    /// or the password does not match. The two cases are indistinguishable
    /// to the caller.
    #[instrument(skip(self, password))]
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let (user, stored_hash) = self
            .users
            .get_with_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &stored_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(user)
    }
}

/// Check that a password meets the minimum requirements.
///
/// # Errors
///
/// Returns [`AuthError::WeakPassword`] if it does not.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with Argon2id and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::PasswordHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
