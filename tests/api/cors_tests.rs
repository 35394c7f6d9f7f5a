//! CORS Tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;

use crate::common::{test_settings, TestApp};

async fn preflight(app: &TestApp, origin: &str) -> Response {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/services/link")
                .header("Origin", origin)
                .header("Access-Control-Request-Method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_preflight_allows_configured_origin() {
    let app = TestApp::new();

    let response = preflight(&app, "http://localhost:3000").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(response.headers()["access-control-max-age"], "3600");
}

#[tokio::test]
async fn test_preflight_omits_header_for_unlisted_origin() {
    let app = TestApp::new();

    let response = preflight(&app, "https://evil.example").await;

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_empty_origin_list_allows_any_origin() {
    let mut settings = test_settings();
    settings.cors.allowed_origins = vec![];
    let app = TestApp::with_settings(settings);

    let response = preflight(&app, "https://anywhere.example").await;

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_unparsable_origins_fall_back_to_any() {
    let mut settings = test_settings();
    settings.cors.allowed_origins = vec!["bad\norigin".into()];
    let app = TestApp::with_settings(settings);

    let response = preflight(&app, "https://anywhere.example").await;

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
