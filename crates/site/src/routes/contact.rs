//! Contact form route handler.
//!
//! Validates the submission field by field, delivers it through the email
//! service, and reports the outcome as JSON. Analytics dispatch is
//! fire-and-forget: a dropped response never aborts the event.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use folio_core::Email;

use crate::error::AppError;
use crate::services::ContactMessage;
use crate::state::AppState;

/// Raw contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Field-level validation messages, keyed by input.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldErrors {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Response for form submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Validate a submission, producing either a deliverable message or
/// field-level errors. Submission is blocked until every field passes.
pub fn validate(form: &ContactForm) -> Result<ContactMessage, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = form.name.trim();
    let name_len = name.chars().count();
    if name_len < 2 {
        errors.name = Some("Name must be at least 2 characters".to_string());
    } else if name_len > 50 {
        errors.name = Some("Name must be less than 50 characters".to_string());
    }

    let email = form.email.trim();
    if Email::parse(email).is_err() {
        errors.email = Some("Please enter a valid email address".to_string());
    }

    let message = form.message.trim();
    let message_len = message.chars().count();
    if message_len < 10 {
        errors.message = Some("Message must be at least 10 characters".to_string());
    } else if message_len > 1000 {
        errors.message = Some("Message must be less than 1000 characters".to_string());
    }

    if errors.is_empty() {
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

/// Track the submission outcome without holding up the response.
fn spawn_form_event(state: &AppState, success: bool) {
    let state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = state
            .analytics()
            .track_form_submission("contact_form", success)
            .await
        {
            tracing::warn!(error = %e, "Failed to dispatch analytics event");
        }
    });
}

/// Submit the contact form.
///
/// POST /contact/send
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let contact = match validate(&form) {
        Ok(contact) => contact,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ContactResponse {
                    success: false,
                    message: Some("Please fix the highlighted fields.".to_string()),
                    errors: Some(errors),
                }),
            ));
        }
    };

    if let Err(e) = state.email().send_contact(&contact).await {
        tracing::error!(error = %e, "Failed to deliver contact message");
        spawn_form_event(&state, false);
        return Err(AppError::Email(e));
    }

    tracing::info!(email = %contact.email, "Contact message delivered");
    spawn_form_event(&state, true);
    Ok((
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: Some("Message sent successfully!".to_string()),
            errors: None,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_single_character_name_is_blocked() {
        let errors = validate(&form("A", "a@example.com", "long enough message"))
            .expect_err("should fail");
        assert_eq!(
            errors.name.as_deref(),
            Some("Name must be at least 2 characters")
        );
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_invalid_email_is_blocked() {
        let errors =
            validate(&form("Sarah", "not-an-email", "long enough message")).expect_err("fail");
        assert_eq!(
            errors.email.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_nine_character_message_is_blocked() {
        let errors = validate(&form("Sarah", "a@example.com", "123456789")).expect_err("fail");
        assert_eq!(
            errors.message.as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_over_limit_fields_are_blocked() {
        let errors = validate(&form(
            &"n".repeat(51),
            "a@example.com",
            &"m".repeat(1001),
        ))
        .expect_err("fail");
        assert_eq!(
            errors.name.as_deref(),
            Some("Name must be less than 50 characters")
        );
        assert_eq!(
            errors.message.as_deref(),
            Some("Message must be less than 1000 characters")
        );
    }

    #[test]
    fn test_valid_form_passes_trimmed() {
        let contact = validate(&form(
            "  Sarah Johnson ",
            " sarah@example.com ",
            "  I would love to collaborate.  ",
        ))
        .expect("valid");
        assert_eq!(contact.name, "Sarah Johnson");
        assert_eq!(contact.email, "sarah@example.com");
        assert_eq!(contact.message, "I would love to collaborate.");
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate(&form("A", "nope", "short")).expect_err("fail");
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
    }
}
