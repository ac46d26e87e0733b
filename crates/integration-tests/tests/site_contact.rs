//! Integration tests for the contact form endpoint.
//!
//! Requires a running site server without SMTP configured, so the mock
//! transport reports success.

use reqwest::StatusCode;
use serde_json::{Value, json};

use folio_integration_tests::{manual_redirect_client, site_base_url};

async fn submit(body: Value) -> (StatusCode, Value) {
    let client = manual_redirect_client();
    let resp = client
        .post(format!("{}/contact/send", site_base_url()))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = resp.status();
    let body: Value = resp.json().await.expect("json body");
    (status, body)
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_short_name_blocks_submission() {
    let (status, body) = submit(json!({
        "name": "A",
        "email": "a@example.com",
        "message": "a perfectly long message"
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["name"], "Name must be at least 2 characters");
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_invalid_email_blocks_submission() {
    let (status, body) = submit(json!({
        "name": "Sarah",
        "email": "not-an-email",
        "message": "a perfectly long message"
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["email"], "Please enter a valid email address");
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_short_message_blocks_submission() {
    let (status, body) = submit(json!({
        "name": "Sarah",
        "email": "sarah@example.com",
        "message": "123456789"
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"]["message"],
        "Message must be at least 10 characters"
    );
}

#[tokio::test]
#[ignore = "Requires running site server with mock email transport"]
async fn test_valid_submission_succeeds() {
    let (status, body) = submit(json!({
        "name": "Sarah Johnson",
        "email": "sarah@example.com",
        "message": "I would love to discuss a collaboration."
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully!");
}
