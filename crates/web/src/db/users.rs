//! Repository for the `users` table.

use chrono::{DateTime, Utc};
use shoplite_core::{Email, UserId};
use sqlx::SqlitePool;

use crate::models::User;

use super::RepositoryError;

/// Row shape for queries that also need the stored password hash.
///
/// Never leaves this module; callers get a [`User`] plus the hash.
#[derive(sqlx::FromRow)]
struct UserWithHash {
    id: UserId,
    email: Email,
    first_name: String,
    last_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Typed access to stored user accounts.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] when the email is already
    /// registered.
    pub async fn create_with_password(
        &self,
        email: &Email,
        first_name: &str,
        last_name: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, first_name, last_name, password_hash, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, email, first_name, last_name, created_at",
        )
        .bind(email.as_str())
        .bind(first_name)
        .bind(last_name)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(format!("email {email} is already registered"));
            }
            RepositoryError::Database(e)
        })?;

        Ok(user)
    }

    /// Fetch a user and their password hash by email.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserWithHash>(
            "SELECT id, email, first_name, last_name, password_hash, created_at
             FROM users WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            (
                User {
                    id: r.id,
                    email: r.email,
                    first_name: r.first_name,
                    last_name: r.last_name,
                    created_at: r.created_at,
                },
                r.password_hash,
            )
        }))
    }

    /// Count all registered users.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
