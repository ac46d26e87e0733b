//! Application state shared across handlers.

use std::sync::Arc;

use lettre::transport::smtp::Error as SmtpError;

use crate::config::SiteConfig;
use crate::content::ResumeContent;
use crate::services::{AnalyticsClient, EmailService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like configuration, content, and outbound services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: ResumeContent,
    email: EmailService,
    analytics: AnalyticsClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport cannot be constructed.
    pub fn new(config: SiteConfig) -> Result<Self, SmtpError> {
        let email = EmailService::new(config.smtp.as_ref(), &config.contact_recipient)?;
        let analytics = AnalyticsClient::new(config.analytics.as_ref());
        let content = ResumeContent::default();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                email,
                analytics,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the résumé content.
    #[must_use]
    pub fn content(&self) -> &ResumeContent {
        &self.inner.content
    }

    /// Get a reference to the email service.
    #[must_use]
    pub fn email(&self) -> &EmailService {
        &self.inner.email
    }

    /// Get a reference to the analytics client.
    #[must_use]
    pub fn analytics(&self) -> &AnalyticsClient {
        &self.inner.analytics
    }
}
