//! HTTP route definitions.
//!
//! Route table:
//!
//! ```text
//! GET       /product_list/            list products
//! GET       /product_detail/{id}      product detail
//! GET/POST  /product_create/          create form / submit
//! GET/POST  /product_update/{id}      update form / submit
//! GET/POST  /product_delete/{id}      confirm / execute delete
//! GET/POST  /class_product_*          aliases for the routes above
//! GET/POST  /register/                registration form / submit
//! GET/POST  /login/                   login form / submit
//! POST      /logout/                  end the session
//! GET       /secret-home/             landing page (login required)
//! ```

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod auth;
pub mod home;
pub mod products;

/// Validation message for a missing required field.
pub(crate) const REQUIRED_FIELD: &str = "This field is required.";

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(product_routes())
        .merge(auth_routes())
        .merge(home_routes())
}

/// Product CRUD pages.
///
/// Every page is also reachable under a `class_` prefixed alias; both
/// spellings dispatch to the same handler.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/product_list/", get(products::list))
        .route("/product_detail/{id}", get(products::detail))
        .route(
            "/product_create/",
            get(products::create_form).post(products::create),
        )
        .route(
            "/product_update/{id}",
            get(products::update_form).post(products::update),
        )
        .route(
            "/product_delete/{id}",
            get(products::confirm_delete).post(products::delete),
        )
        .route("/class_product_list/", get(products::list))
        .route("/class_product_detail/{id}", get(products::detail))
        .route(
            "/class_product_create/",
            get(products::create_form).post(products::create),
        )
        .route(
            "/class_product_update/{id}",
            get(products::update_form).post(products::update),
        )
        .route(
            "/class_product_delete/{id}",
            get(products::confirm_delete).post(products::delete),
        )
}

/// Registration, login and logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", get(auth::register_page).post(auth::register))
        .route("/login/", get(auth::login_page).post(auth::login))
        .route("/logout/", post(auth::logout))
}

/// Landing page behind authentication.
fn home_routes() -> Router<AppState> {
    Router::new().route("/secret-home/", get(home::secret_home))
}
