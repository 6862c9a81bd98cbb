//! Landing page behind authentication.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::filters;
use crate::middleware::auth::RequireAuth;
use crate::models::CurrentUser;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {
    user: CurrentUser,
}

/// GET /secret-home/
///
/// Unauthenticated requests are redirected to the login page by the
/// [`RequireAuth`] extractor.
pub async fn secret_home(RequireAuth(user): RequireAuth) -> Response {
    HomeTemplate { user }.into_response()
}
