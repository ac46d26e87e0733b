//! Middleware and extractors for the admin panel.

pub mod auth;

pub use auth::{OptionalAdminAuth, RequireAdminAuth};
