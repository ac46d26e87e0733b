//! Authentication route handlers for the admin panel.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::OptionalAdminAuth;
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginPageTemplate {
    pub error: Option<&'static str>,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Checkbox: present when checked.
    #[serde(default)]
    pub remember: Option<String>,
}

/// Render the login page.
///
/// GET /login
pub async fn login_page(OptionalAdminAuth(session): OptionalAdminAuth) -> impl IntoResponse {
    if session.is_some() {
        return Redirect::to("/").into_response();
    }
    LoginPageTemplate { error: None }.into_response()
}

/// Attempt a login.
///
/// POST /login
///
/// Failure re-renders the page with one generic message; it never says
/// whether the email or the password was wrong.
#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<axum::response::Response> {
    let remember = form.remember.is_some();
    let session = state
        .auth()
        .login(form.email.trim(), &form.password, remember)?;

    match session {
        Some(session) => {
            tracing::info!(admin = %session.name, "Login succeeded");
            Ok(Redirect::to("/").into_response())
        }
        None => Ok(LoginPageTemplate {
            error: Some("Invalid email or password"),
        }
        .into_response()),
    }
}

/// Logout and destroy the session.
///
/// POST /logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.auth().logout();
    Redirect::to("/login")
}
