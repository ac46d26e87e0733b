//! Email delivery for contact form submissions.
//!
//! Uses SMTP via lettre with Askama HTML templates. When no SMTP host is
//! configured the service runs against a mock transport that logs the
//! message and reports success, so the contact form works in development
//! without credentials.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::SmtpConfig;

/// A validated contact form submission ready for delivery.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// HTML template for the contact notification email.
#[derive(Template)]
#[template(path = "email/contact.html")]
struct ContactEmailHtml<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Plain text template for the contact notification email.
#[derive(Template)]
#[template(path = "email/contact.txt")]
struct ContactEmailText<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

enum Transport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Mock,
}

/// Email service delivering contact form notifications.
pub struct EmailService {
    transport: Transport,
    from_address: String,
    recipient: String,
}

impl EmailService {
    /// Create an email service from configuration.
    ///
    /// `None` SMTP configuration selects the mock transport.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be constructed.
    pub fn new(smtp: Option<&SmtpConfig>, recipient: &str) -> Result<Self, SmtpError> {
        let Some(config) = smtp else {
            tracing::info!("SMTP not configured, contact email runs in mock mode");
            return Ok(Self {
                transport: Transport::Mock,
                from_address: "folio@localhost".to_string(),
                recipient: recipient.to_string(),
            });
        };

        let credentials = Credentials::new(
            config.username.clone(),
            config.password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport: Transport::Smtp(mailer),
            from_address: config.from_address.clone(),
            recipient: recipient.to_string(),
        })
    }

    /// Whether the service delivers over a real SMTP relay.
    #[must_use]
    pub const fn is_mock(&self) -> bool {
        matches!(self.transport, Transport::Mock)
    }

    /// Deliver a contact form submission to the configured recipient.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to render, build, or send.
    pub async fn send_contact(&self, contact: &ContactMessage) -> Result<(), EmailError> {
        let html = ContactEmailHtml {
            name: &contact.name,
            email: &contact.email,
            message: &contact.message,
        }
        .render()?;
        let text = ContactEmailText {
            name: &contact.name,
            email: &contact.email,
            message: &contact.message,
        }
        .render()?;

        let subject = format!("Portfolio contact from {}", contact.name);
        self.send_multipart_email(&subject, &text, &html).await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        let Transport::Smtp(mailer) = &self.transport else {
            tracing::info!(
                to = %self.recipient,
                subject = %subject,
                "Mock email transport, message logged instead of sent"
            );
            return Ok(());
        };

        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(self
                .recipient
                .parse()
                .map_err(|_| EmailError::InvalidAddress(self.recipient.clone()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        mailer.send(email).await?;

        tracing::info!(to = %self.recipient, subject = %subject, "Email sent successfully");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_service_is_mock() {
        let service = EmailService::new(None, "owner@example.com").unwrap();
        assert!(service.is_mock());
    }

    #[tokio::test]
    async fn test_mock_send_succeeds() {
        let service = EmailService::new(None, "owner@example.com").unwrap();
        let contact = ContactMessage {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            message: "I would love to discuss a collaboration.".to_string(),
        };
        assert!(service.send_contact(&contact).await.is_ok());
    }

    #[test]
    fn test_contact_templates_render_fields() {
        let html = ContactEmailHtml {
            name: "Sarah",
            email: "sarah@example.com",
            message: "Hello there",
        }
        .render()
        .unwrap();
        assert!(html.contains("Sarah"));
        assert!(html.contains("sarah@example.com"));
        assert!(html.contains("Hello there"));

        let text = ContactEmailText {
            name: "Sarah",
            email: "sarah@example.com",
            message: "Hello there",
        }
        .render()
        .unwrap();
        assert!(text.contains("Hello there"));
    }
}
