//! Analytics event dispatch.
//!
//! Sends named events with parameter maps to a measurement-protocol style
//! collection endpoint. Unconfigured, every call is a logged no-op, so
//! handlers can track unconditionally. Dispatch is fire-and-forget: callers
//! spawn the future and never cancel it.

use rand::Rng;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::AnalyticsConfig;

/// Errors that can occur when dispatching an event.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status.
    #[error("API error: {status}")]
    Api { status: u16 },
}

#[derive(Serialize)]
struct EventEnvelope<'a> {
    client_id: &'a str,
    events: [EventBody<'a>; 1],
}

#[derive(Serialize)]
struct EventBody<'a> {
    name: &'a str,
    params: &'a Value,
}

struct AnalyticsInner {
    http: Client,
    config: AnalyticsConfig,
    /// Random per-process client id; the site has no visitor identity.
    client_id: String,
}

/// Client for the analytics collection endpoint.
pub struct AnalyticsClient {
    inner: Option<AnalyticsInner>,
}

impl AnalyticsClient {
    /// Create a client; `None` configuration disables dispatch.
    #[must_use]
    pub fn new(config: Option<&AnalyticsConfig>) -> Self {
        let inner = config.map(|config| AnalyticsInner {
            http: Client::new(),
            config: config.clone(),
            client_id: format!("folio.{}", rand::rng().random::<u64>()),
        });

        if inner.is_none() {
            tracing::info!("Analytics not configured, events will be logged only");
        }

        Self { inner }
    }

    /// Whether events are actually dispatched.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Send a named event with a parameter map.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the endpoint rejects
    /// the event. Callers typically log and drop the error.
    pub async fn track_event(&self, name: &str, params: Value) -> Result<(), AnalyticsError> {
        let Some(inner) = &self.inner else {
            tracing::debug!(event = name, %params, "Analytics event (disabled)");
            return Ok(());
        };

        let envelope = EventEnvelope {
            client_id: &inner.client_id,
            events: [EventBody {
                name,
                params: &params,
            }],
        };

        let response = inner
            .http
            .post(&inner.config.endpoint)
            .query(&[
                ("measurement_id", inner.config.measurement_id.as_str()),
                ("api_secret", inner.config.api_secret.expose_secret()),
            ])
            .json(&envelope)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Api {
                status: status.as_u16(),
            });
        }

        tracing::debug!(event = name, "Analytics event dispatched");
        Ok(())
    }

    /// Track a contact form submission outcome.
    ///
    /// # Errors
    ///
    /// See [`Self::track_event`].
    pub async fn track_form_submission(
        &self,
        form_name: &str,
        success: bool,
    ) -> Result<(), AnalyticsError> {
        let action = if success {
            "form_submission_success"
        } else {
            "form_submission_error"
        };
        self.track_event(
            action,
            serde_json::json!({ "category": "Form", "label": form_name }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_client_is_a_noop() {
        let client = AnalyticsClient::new(None);
        assert!(!client.is_enabled());
        let result = client
            .track_event("project_view", serde_json::json!({ "label": "1" }))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_form_submission_event_names() {
        // Disabled client exercises the naming path without network I/O.
        let client = AnalyticsClient::new(None);
        assert!(client.track_form_submission("contact_form", true).await.is_ok());
        assert!(client.track_form_submission("contact_form", false).await.is_ok());
    }
}
