//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Health check
//! GET  /                               - Dashboard overview
//!
//! # Auth
//! GET  /login                          - Login page
//! POST /login                          - Login action (email/password/remember)
//! POST /logout                         - Logout
//!
//! # Content pages
//! GET  /projects                       - Project listing (+ editor modal)
//! POST /projects                       - Create project
//! POST /projects/{id}                  - Update project
//! POST /projects/{id}/delete           - Delete project
//! GET  /messages                       - Inbox
//! POST /messages/{id}/read             - Mark message read
//! POST /messages/{id}/delete           - Delete message
//! GET  /settings                       - Settings page
//! POST /settings                       - Update settings
//!
//! # Preferences
//! POST /preferences/theme              - Toggle dark/light theme
//! POST /preferences/sidebar            - Persist sidebar collapse
//!
//! # Collections API (JSON, every collection kind)
//! GET    /api/collections/{kind}       - List records
//! POST   /api/collections/{kind}       - Create record
//! PUT    /api/collections/{kind}/{id}  - Patch record
//! DELETE /api/collections/{kind}/{id}  - Delete record
//! GET    /api/settings                 - Read settings record
//! PUT    /api/settings                 - Replace settings record
//! ```

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod messages;
pub mod preferences;
pub mod projects;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use folio_core::AdminRole;

use crate::models::{AdminSession, store_keys};
use crate::state::AppState;
use crate::ui::{Toast, ToastQuery};

/// Create the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/projects", get(projects::index).post(projects::create))
        .route("/projects/{id}", post(projects::update))
        .route("/projects/{id}/delete", post(projects::delete))
        .route("/messages", get(messages::index))
        .route("/messages/{id}/read", post(messages::mark_read))
        .route("/messages/{id}/delete", post(messages::delete))
        .route("/settings", get(settings::page).post(settings::save))
        .route("/preferences/theme", post(preferences::toggle_theme))
        .route("/preferences/sidebar", post(preferences::set_sidebar))
        .merge(api::router())
}

/// Admin identity view for templates.
#[derive(Debug, Clone)]
pub struct AdminView {
    pub name: String,
    pub initials: String,
    pub role: &'static str,
    pub is_super_admin: bool,
}

impl From<&AdminSession> for AdminView {
    fn from(session: &AdminSession) -> Self {
        Self {
            name: session.name.clone(),
            initials: session.initials.clone(),
            role: session.role.label(),
            is_super_admin: session.role == AdminRole::SuperAdmin,
        }
    }
}

/// Shared page chrome: identity, navigation state, preferences, toast.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub admin: AdminView,
    pub current_path: &'static str,
    pub theme: String,
    pub sidebar_collapsed: bool,
    pub toast: Option<Toast>,
}

/// Build the chrome for a page render, reading UI preferences from the store.
fn chrome(
    state: &AppState,
    session: &AdminSession,
    current_path: &'static str,
    toast_query: &ToastQuery,
) -> Chrome {
    let theme = state
        .store()
        .get_raw(store_keys::THEME)
        .ok()
        .flatten()
        .unwrap_or_else(|| "dark".to_string());
    let sidebar_collapsed = state
        .store()
        .get_raw(store_keys::SIDEBAR_COLLAPSED)
        .ok()
        .flatten()
        .is_some_and(|raw| raw == "true");

    Chrome {
        admin: AdminView::from(session),
        current_path,
        theme,
        sidebar_collapsed,
        toast: Toast::from_query(toast_query),
    }
}

/// Redirect to a page with a toast encoded in the query.
fn redirect_with_toast(path: &str, toast: &Toast) -> axum::response::Redirect {
    axum::response::Redirect::to(&format!("{path}?{}", toast.query()))
}
