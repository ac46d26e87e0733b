//! Integration tests for the generated artifacts endpoints.

use reqwest::StatusCode;

use folio_integration_tests::{manual_redirect_client, site_base_url};

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_sitemap_lists_public_routes() {
    let client = manual_redirect_client();
    let resp = client
        .get(format!("{}/sitemap.xml", site_base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("<urlset"));
    assert_eq!(body.matches("<url>").count(), 9);
    assert!(body.contains("<priority>1.0</priority>"));
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_robots_points_at_sitemap() {
    let client = manual_redirect_client();
    let resp = client
        .get(format!("{}/robots.txt", site_base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Disallow: /api/"));
    assert!(body.contains("sitemap.xml"));
}
