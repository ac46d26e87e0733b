//! Outbound integrations: email delivery and analytics events.

pub mod analytics;
pub mod email;

pub use analytics::AnalyticsClient;
pub use email::{ContactMessage, EmailError, EmailService};
