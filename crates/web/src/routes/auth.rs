//! Registration and login pages.
//!
//! Field names and messages follow the conventions the HTML forms were
//! built around: the password pair is `password1`/`password2`, and failed
//! validation re-renders the form with per-field errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::auth::set_current_user;
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService, MIN_PASSWORD_LENGTH};
use crate::state::AppState;

use super::REQUIRED_FIELD;

const INVALID_EMAIL: &str = "Enter a valid email address.";
const EMAIL_TAKEN: &str = "A user with this email already exists.";
const PASSWORD_MISMATCH: &str = "The two password fields didn't match.";
const PASSWORD_TOO_SHORT: &str =
    "This password is too short. It must contain at least 8 characters.";
const INVALID_CREDENTIALS: &str = "Invalid Credentials";

// ============================================================================
// Templates
// ============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
struct RegisterTemplate {
    form: RegisterForm,
    errors: RegisterFormErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    form: LoginForm,
    errors: LoginFormErrors,
}

// ============================================================================
// Forms
// ============================================================================

/// Raw registration submission.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

/// Per-field errors for the registration form.
#[derive(Debug, Default)]
pub struct RegisterFormErrors {
    pub email: Option<&'static str>,
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub password1: Option<&'static str>,
    pub password2: Option<&'static str>,
}

impl RegisterFormErrors {
    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password1.is_none()
            && self.password2.is_none()
    }
}

impl RegisterForm {
    /// Presence checks and the password pair rules.
    ///
    /// Passwords are compared verbatim; whitespace is only stripped from
    /// the name and email fields.
    fn validate(&self) -> RegisterFormErrors {
        let mut errors = RegisterFormErrors::default();

        if self.email.trim().is_empty() {
            errors.email = Some(REQUIRED_FIELD);
        }
        if self.first_name.trim().is_empty() {
            errors.first_name = Some(REQUIRED_FIELD);
        }
        if self.last_name.trim().is_empty() {
            errors.last_name = Some(REQUIRED_FIELD);
        }
        if self.password1.is_empty() {
            errors.password1 = Some(REQUIRED_FIELD);
        }

        if self.password2.is_empty() {
            errors.password2 = Some(REQUIRED_FIELD);
        } else if self.password1 != self.password2 {
            errors.password2 = Some(PASSWORD_MISMATCH);
        } else if self.password2.len() < MIN_PASSWORD_LENGTH {
            errors.password2 = Some(PASSWORD_TOO_SHORT);
        }

        errors
    }
}

/// Raw login submission.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Errors for the login form. `message` is the form-level failure line.
#[derive(Debug, Default)]
pub struct LoginFormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub message: Option<&'static str>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /register/
pub async fn register_page() -> Response {
    RegisterTemplate {
        form: RegisterForm::default(),
        errors: RegisterFormErrors::default(),
    }
    .into_response()
}

/// POST /register/
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let mut errors = form.validate();
    if !errors.is_empty() {
        return Ok(RegisterTemplate { form, errors }.into_response());
    }

    let service = AuthService::new(state.pool());
    let outcome = service
        .register_with_password(
            form.email.trim(),
            form.first_name.trim(),
            form.last_name.trim(),
            &form.password1,
        )
        .await;

    match outcome {
        Ok(_) => Ok(Redirect::to("/login/").into_response()),
        Err(AuthError::InvalidEmail(_)) => {
            errors.email = Some(INVALID_EMAIL);
            Ok(RegisterTemplate { form, errors }.into_response())
        }
        Err(AuthError::UserAlreadyExists) => {
            errors.email = Some(EMAIL_TAKEN);
            Ok(RegisterTemplate { form, errors }.into_response())
        }
        Err(AuthError::WeakPassword(_)) => {
            errors.password2 = Some(PASSWORD_TOO_SHORT);
            Ok(RegisterTemplate { form, errors }.into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /login/
pub async fn login_page() -> Response {
    LoginTemplate {
        form: LoginForm::default(),
        errors: LoginFormErrors::default(),
    }
    .into_response()
}

/// POST /login/
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let mut errors = LoginFormErrors::default();
    if form.email.trim().is_empty() {
        errors.email = Some(REQUIRED_FIELD);
    }
    if form.password.is_empty() {
        errors.password = Some(REQUIRED_FIELD);
    }
    if errors.email.is_some() || errors.password.is_some() {
        return Ok(LoginTemplate { form, errors }.into_response());
    }

    let service = AuthService::new(state.pool());
    let user = match service
        .login_with_password(form.email.trim(), &form.password)
        .await
    {
        Ok(user) => user,
        Err(AuthError::InvalidEmail(_)) => {
            errors.email = Some(INVALID_EMAIL);
            return Ok(LoginTemplate { form, errors }.into_response());
        }
        Err(AuthError::InvalidCredentials) => {
            errors.message = Some(INVALID_CREDENTIALS);
            return Ok(LoginTemplate { form, errors }.into_response());
        }
        Err(e) => return Err(e.into()),
    };

    set_current_user(
        &session,
        &CurrentUser {
            id: user.id,
            email: user.email,
        },
    )
    .await?;

    Ok(Redirect::to("/secret-home/").into_response())
}

/// POST /logout/
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Response> {
    session.flush().await?;
    Ok(Redirect::to("/login/").into_response())
}
