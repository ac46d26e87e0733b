//! Services for the admin panel.

pub mod auth;

pub use auth::AuthService;
