//! Integration tests for the admin auth gate.
//!
//! Requires a running admin server, ideally ephemeral:
//! `ADMIN_EPHEMERAL=true cargo run -p folio-admin`.
//!
//! The session is one record in the store, so login state is shared across
//! clients; each test resets it through /logout first.

use reqwest::{Client, StatusCode};

use folio_integration_tests::{admin_base_url, manual_redirect_client};

async fn logout(client: &Client) {
    let _ = client
        .post(format!("{}/logout", admin_base_url()))
        .send()
        .await;
}

async fn login(client: &Client, email: &str, password: &str) -> StatusCode {
    client
        .post(format!("{}/login", admin_base_url()))
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .expect("request failed")
        .status()
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_dashboard_requires_auth() {
    let client = manual_redirect_client();
    logout(&client).await;

    let resp = client
        .get(format!("{}/", admin_base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/login")
    );
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_api_rejects_unauthenticated_with_401() {
    let client = manual_redirect_client();
    logout(&client).await;

    let resp = client
        .get(format!("{}/api/collections/projects", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_invalid_credentials_get_one_generic_message() {
    let client = manual_redirect_client();
    logout(&client).await;

    for (email, password) in [
        ("admin@vc.com", "wrong-password"),
        ("nobody@vc.com", "Admin@123"),
    ] {
        let resp = client
            .post(format!("{}/login", admin_base_url()))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("request failed");

        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.text().await.expect("body");
        assert!(body.contains("Invalid email or password"));
    }

    // Still logged out.
    let resp = client
        .get(format!("{}/", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_login_then_dashboard_then_logout() {
    let client = manual_redirect_client();
    logout(&client).await;

    let status = login(&client, "admin@vc.com", "Admin@123").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let resp = client
        .get(format!("{}/", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Dashboard"));
    assert!(body.contains("V Chaitanya"));

    logout(&client).await;
    let resp = client
        .get(format!("{}/", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}
