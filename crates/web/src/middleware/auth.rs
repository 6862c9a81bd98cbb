//! Authentication extractors.
//!
//! Handlers take [`RequireAuth`] to demand a logged-in user; the extractor
//! reads the identity that the login handler stored in the session.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Extractor that requires a logged-in user.
///
/// Unauthenticated requests are redirected to the login page.
pub struct RequireAuth(pub CurrentUser);

/// Rejection for [`RequireAuth`].
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to("/login/").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The SessionManagerLayer stores the session in request extensions.
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(RedirectToLogin)?;

        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or(RedirectToLogin)?;

        Ok(Self(user))
    }
}

/// Store the logged-in user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}
