//! UI preference handlers: theme and sidebar collapse.

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::store_keys;
use crate::state::AppState;

/// Response for preference updates.
#[derive(Debug, Serialize)]
pub struct PreferenceResponse {
    pub success: bool,
    pub value: String,
}

/// The theme following `current`; anything unrecognized counts as dark.
fn next_theme(current: &str) -> &'static str {
    if current == "dark" { "light" } else { "dark" }
}

/// Toggle the UI theme between dark and light.
///
/// POST /preferences/theme
#[instrument(skip(state))]
pub async fn toggle_theme(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<PreferenceResponse>> {
    let current = state
        .store()
        .get_raw(store_keys::THEME)?
        .unwrap_or_else(|| "dark".to_string());
    let next = next_theme(&current);

    state.store().set_raw(store_keys::THEME, next)?;

    Ok(Json(PreferenceResponse {
        success: true,
        value: next.to_string(),
    }))
}

/// Sidebar collapse form data.
#[derive(Debug, Deserialize)]
pub struct SidebarForm {
    pub collapsed: bool,
}

/// Persist the sidebar collapse preference.
///
/// POST /preferences/sidebar
#[instrument(skip(state))]
pub async fn set_sidebar(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<SidebarForm>,
) -> Result<Json<PreferenceResponse>> {
    let value = if form.collapsed { "true" } else { "false" };
    state.store().set_raw(store_keys::SIDEBAR_COLLAPSED, value)?;

    Ok(Json(PreferenceResponse {
        success: true,
        value: value.to_string(),
    }))
}
