//! Settings page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use folio_core::SiteSettings;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::routes::{Chrome, chrome, redirect_with_toast};
use crate::state::AppState;
use crate::ui::{Toast, ToastQuery};

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub chrome: Chrome,
    pub settings: SiteSettings,
}

/// Settings form fields.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub site_name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub site_title: String,
    pub meta_desc: String,
    pub meta_keywords: String,
    #[serde(default)]
    pub open_to_work: Option<String>,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
}

/// Render the settings page.
///
/// GET /settings
#[instrument(skip(state, toast_query))]
pub async fn page(
    RequireAdminAuth(session): RequireAdminAuth,
    State(state): State<AppState>,
    Query(toast_query): Query<ToastQuery>,
) -> SettingsTemplate {
    SettingsTemplate {
        chrome: chrome(&state, &session, "/settings", &toast_query),
        settings: state.store().settings(),
    }
}

/// Replace the settings record.
///
/// POST /settings
#[instrument(skip(state, form))]
pub async fn save(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect> {
    let settings = SiteSettings {
        site_name: form.site_name.trim().to_string(),
        tagline: form.tagline.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        location: form.location.trim().to_string(),
        bio: form.bio.trim().to_string(),
        site_title: form.site_title.trim().to_string(),
        meta_desc: form.meta_desc.trim().to_string(),
        meta_keywords: form.meta_keywords.trim().to_string(),
        open_to_work: form.open_to_work.is_some(),
        github_url: form.github_url.trim().to_string(),
        linkedin_url: form.linkedin_url.trim().to_string(),
        twitter_url: form.twitter_url.trim().to_string(),
    };

    state.store().set_settings(&settings)?;
    tracing::info!("Settings updated");

    Ok(redirect_with_toast(
        "/settings",
        &Toast::success("Settings saved"),
    ))
}
