//! Integration tests for Folio.
//!
//! # Running Tests
//!
//! ```bash
//! # Start both servers
//! cargo run -p folio-site &
//! ADMIN_EPHEMERAL=true cargo run -p folio-admin &
//!
//! # Run integration tests
//! cargo test -p folio-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `site_sections` - Section routing and redirects
//! - `site_contact` - Contact form validation and delivery
//! - `site_artifacts` - Sitemap and robots output
//! - `admin_auth` - Login, logout, and the auth gate
//! - `admin_content` - Collection CRUD through the JSON API
//!
//! Tests are `#[ignore]`d because they need both binaries running; the
//! helpers read `SITE_BASE_URL` / `ADMIN_BASE_URL` to find them.

/// Base URL for the public site (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// An HTTP client that does not follow redirects, so tests can assert them.
#[must_use]
pub fn manual_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
