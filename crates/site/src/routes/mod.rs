//! HTTP route handlers for the public site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Résumé page (hero section active)
//! GET  /{section}              - Résumé page scrolled to a section;
//!                                unknown paths redirect to /
//! POST /contact/send           - Contact form submission (JSON)
//! GET  /sitemap.xml            - Sitemap over the public routes
//! GET  /robots.txt             - Robots directives
//! GET  /health                 - Health check
//! ```

pub mod contact;
pub mod resume;

use axum::{
    Router,
    routing::{get, post},
};

use crate::seo;
use crate::state::AppState;

/// Create the site router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(resume::index))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .route("/contact/send", post(contact::submit))
        .route("/{section}", get(resume::section))
        .fallback(resume::fallback)
}
