//! Integration tests for collection CRUD through the admin JSON API.
//!
//! Requires a running admin server, ideally ephemeral:
//! `ADMIN_EPHEMERAL=true cargo run -p folio-admin`.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use folio_integration_tests::{admin_base_url, manual_redirect_client};

async fn login(client: &Client) {
    let status = client
        .post(format!("{}/login", admin_base_url()))
        .form(&[("email", "admin@vc.com"), ("password", "Admin@123")])
        .send()
        .await
        .expect("request failed")
        .status();
    assert_eq!(status, StatusCode::SEE_OTHER);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_projects_seed_on_first_read() {
    let client = manual_redirect_client();
    login(&client).await;

    let resp = client
        .get(format!("{}/api/collections/projects", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Value = resp.json().await.expect("json");
    let items = items.as_array().expect("array");
    assert!(items.len() >= 5, "seed installs five projects");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_create_patch_delete_round_trip() {
    let client = manual_redirect_client();
    login(&client).await;

    // Create: the store assigns an id above every existing one.
    let resp = client
        .post(format!("{}/api/collections/projects", admin_base_url()))
        .json(&json!({
            "title": "Integration Test Project",
            "category": "Testing",
            "description": "Created by the integration suite.",
            "date": "2025-03-01"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("json");
    let id = created["id"].as_i64().expect("id");
    assert!(id >= 6);

    // Patch only the title; other fields stay.
    let resp = client
        .put(format!(
            "{}/api/collections/projects/{id}",
            admin_base_url()
        ))
        .json(&json!({ "title": "Renamed by test" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Value = resp.json().await.expect("json");
    assert_eq!(patched["title"], "Renamed by test");
    assert_eq!(patched["category"], "Testing");

    // Delete, then the id is gone; deleting again stays a no-op.
    let resp = client
        .delete(format!(
            "{}/api/collections/projects/{id}",
            admin_base_url()
        ))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .delete(format!(
            "{}/api/collections/projects/{id}",
            admin_base_url()
        ))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_patch_unknown_id_is_404() {
    let client = manual_redirect_client();
    login(&client).await;

    let resp = client
        .put(format!(
            "{}/api/collections/projects/99999",
            admin_base_url()
        ))
        .json(&json!({ "title": "ghost" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_unknown_collection_is_404() {
    let client = manual_redirect_client();
    login(&client).await;

    let resp = client
        .get(format!("{}/api/collections/widgets", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_settings_round_trip() {
    let client = manual_redirect_client();
    login(&client).await;

    let resp = client
        .get(format!("{}/api/settings", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let mut settings: Value = resp.json().await.expect("json");

    settings["tagline"] = json!("Updated by the integration suite");
    let resp = client
        .put(format!("{}/api/settings", admin_base_url()))
        .json(&settings)
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/api/settings", admin_base_url()))
        .send()
        .await
        .expect("request failed");
    let fetched: Value = resp.json().await.expect("json");
    assert_eq!(fetched["tagline"], "Updated by the integration suite");
}
