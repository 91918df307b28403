//! End-to-end tests driving the generation pipeline through the router.
//!
//! No OpenAI key is configured, so every generation exercises the demo
//! fallback path without network access.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::server::app::build_app;

fn app() -> Router {
    build_app(None)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn generate_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/websites/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn acme_body() -> Value {
    json!({
        "name": "Acme",
        "description": "A sixty character description of the Acme demo website.....",
        "includeNavigation": true,
        "includeFooter": true,
        "includeContactForm": false,
        "isResponsive": true,
        "primaryColor": "#112233",
        "secondaryColor": "#445566",
        "imageUrls": [],
        "styleTemplate": "modern"
    })
}

#[tokio::test]
async fn test_generate_acme_demo_scenario() {
    let app = app();

    let response = app.oneshot(generate_request(&acme_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let website = body_json(response).await;
    assert_eq!(website["name"], "Acme");
    assert_eq!(
        website["navigationItems"],
        json!(["Home", "About", "Services", "Contact"])
    );

    let html = website["generatedHtml"].as_str().unwrap();
    assert!(!html.contains("image-gallery"));

    let css = website["generatedCss"].as_str().unwrap();
    assert!(css.contains("@media (max-width: 768px)"));
    assert!(css.contains("linear-gradient(135deg, #112233 0%, #445566 100%)"));
}

#[tokio::test]
async fn test_validation_errors_enumerate_all_fields() {
    let app = app();

    let body = json!({
        "name": "",
        "description": "too short",
        "primaryColor": "#ZZZZZZ"
    });
    let response = app.oneshot(generate_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = body_json(response).await;
    assert_eq!(payload["message"], "Validation error");

    let fields: Vec<&str> = payload["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "description", "primaryColor"]);
}

#[tokio::test]
async fn test_get_website_roundtrip_and_missing_id() {
    let app = app();

    let response = app
        .clone()
        .oneshot(generate_request(&acme_body()))
        .await
        .unwrap();
    let website = body_json(response).await;
    let id = website["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/websites/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched, website);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/websites/00000000-0000-0000-0000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_recent_newest_first() {
    let app = app();

    for name in ["One", "Two", "Three"] {
        let mut body = acme_body();
        body["name"] = json!(name);
        let response = app
            .clone()
            .oneshot(generate_request(&body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/websites?limit=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let websites = body_json(response).await;
    let names: Vec<&str> = websites
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Three", "Two"]);
}

#[tokio::test]
async fn test_preview_serves_standalone_document() {
    let app = app();

    let response = app
        .clone()
        .oneshot(generate_request(&acme_body()))
        .await
        .unwrap();
    let website = body_json(response).await;
    let id = website["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/preview/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let doc = body_text(response).await;
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>Acme</title>"));
    assert!(doc.contains("linear-gradient(135deg, #112233 0%, #445566 100%)"));
}

#[tokio::test]
async fn test_preview_missing_id_renders_html_not_found() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/preview/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let doc = body_text(response).await;
    assert!(doc.contains("Website Not Found"));
}

#[tokio::test]
async fn test_preview_code_view_escapes_html() {
    let app = app();

    let response = app
        .clone()
        .oneshot(generate_request(&acme_body()))
        .await
        .unwrap();
    let website = body_json(response).await;
    let id = website["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/preview/{}/code", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_text(response).await;
    assert!(doc.contains("Generated Code for: Acme"));
    assert!(doc.contains("&lt;div class=&quot;website-container&quot;&gt;"));
}

#[tokio::test]
async fn test_preview_download_sets_attachment_header() {
    let app = app();

    let mut body = acme_body();
    body["name"] = json!("Acme Studio");
    let response = app
        .clone()
        .oneshot(generate_request(&body))
        .await
        .unwrap();
    let website = body_json(response).await;
    let id = website["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/preview/{}/download", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap(),
        "attachment; filename=\"acme-studio.html\""
    );
}

#[tokio::test]
async fn test_styles_and_health_endpoints() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/styles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let presets = body_json(response).await;
    assert_eq!(presets.as_array().unwrap().len(), 5);
    assert_eq!(presets[0]["template"], "modern");
    assert_eq!(presets[0]["primaryColor"], "#667eea");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let health = body_json(response).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["demo_mode"], true);
}
