//! Types stored in the session.

use serde::{Deserialize, Serialize};

use shoplite_core::{Email, UserId};

/// Identity of the logged-in user, as persisted in the session store.
///
/// Holds only the id and email; anything else is fetched from the
/// database when needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Email,
}

/// Keys under which authentication data lives in the session.
pub mod keys {
    /// The logged-in user, a serialized [`CurrentUser`](super::CurrentUser).
    pub const CURRENT_USER: &str = "current_user";
}
