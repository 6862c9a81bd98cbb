//! User account model.

use chrono::{DateTime, Utc};
use shoplite_core::{Email, UserId};

/// A registered user account.
///
/// The password hash never appears on this struct; repository methods
/// that need it return it alongside.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Database ID.
    pub id: UserId,
    /// Login identifier, unique across accounts.
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}
