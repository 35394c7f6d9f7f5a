//! Metrics Endpoint Tests

use axum::http::{header, StatusCode};

use crate::common::{text_body, TestApp};

#[tokio::test]
async fn test_metrics_exposes_request_and_link_counters() {
    let app = TestApp::new();

    app.post_json(
        "/api/v1/services/link",
        r#"{"slug":"reiki-101","serviceTypeCode":"course"}"#,
    )
    .await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let body = text_body(response).await;
    assert!(body.contains("marketplace_links_http_requests_total"));
    assert!(body.contains(r#"marketplace_links_service_links_resolved_total{service_type="course"}"#));
}
