//! Data models for the admin panel.

pub mod session;

pub use session::{AdminSession, store_keys};
