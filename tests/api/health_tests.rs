//! Health Endpoint Tests

use axum::http::StatusCode;

use crate::common::{json_body, TestApp};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let (status, body) = json_body(app.get("/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new();

    let (status, body) = json_body(app.get("/health/live").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness() {
    let app = TestApp::new();

    let (status, body) = json_body(app.get("/health/ready").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["checks"]["link_resolver"]["status"], "healthy");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let (status, body) = json_body(app.get("/api/v1/nope").await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 10001);
    assert_eq!(body["message"], "No route for /api/v1/nope");
}
