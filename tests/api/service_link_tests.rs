//! Service Link API Tests

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{json_body, test_settings, TestApp, TEST_MAX_BATCH_SIZE};
use marketplace_links::startup::build_router;

fn server() -> TestServer {
    TestServer::new(build_router(test_settings())).unwrap()
}

#[tokio::test]
async fn test_resolve_link_for_workshop() {
    let response = server()
        .post("/api/v1/services/link")
        .json(&json!({ "slug": "sunrise-yoga", "serviceTypeCode": "workshop" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "path": "/workshops/sunrise-yoga",
        "label": "Reserve Spot",
        "serviceType": "workshop"
    }));
}

#[tokio::test]
async fn test_resolve_link_prefers_slug_over_id() {
    let response = server()
        .post("/api/v1/services/link")
        .json(&json!({ "id": 123, "slug": "abc", "serviceTypeCode": "Course" }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["path"], "/courses/abc");
    assert_eq!(body["label"], "Start Journey");
}

#[tokio::test]
async fn test_resolve_link_from_nested_type_name() {
    let response = server()
        .post("/api/v1/services/link")
        .json(&json!({ "publicUuid": "7c1e", "serviceType": { "name": "Bundle" } }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["path"], "/bundles/7c1e");
    assert_eq!(body["label"], "View Bundle");
    assert_eq!(body["serviceType"], "bundle");
}

#[tokio::test]
async fn test_resolve_link_unknown_type_falls_back() {
    let response = server()
        .post("/api/v1/services/link")
        .json(&json!({ "id": 9, "serviceTypeCode": "retreat", "serviceTypeDisplay": "Retreat" }))
        .await;

    response.assert_json(&json!({
        "path": "/services/9",
        "label": "View Details",
        "serviceType": "other"
    }));
}

#[tokio::test]
async fn test_resolve_link_without_identifier_keeps_empty_segment() {
    let response = server().post("/api/v1/services/link").json(&json!({})).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "path": "/sessions/",
        "label": "Book Session",
        "serviceType": "session"
    }));
}

#[tokio::test]
async fn test_resolve_link_tolerates_mistyped_fields() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/services/link",
            r#"{"slug": false, "id": "x-1", "serviceType": "workshop", "serviceTypeCode": 12}"#,
        )
        .await;
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path"], "/sessions/x-1");
}

#[tokio::test]
async fn test_resolve_link_rejects_non_object_body() {
    let app = TestApp::new();

    for body in [r#""sunrise-yoga""#, "42", "[]", r#"["x", "abc"]"#, "null"] {
        let response = app.post_json("/api/v1/services/link", body).await;
        let (status, json) = json_body(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(json["code"], 10002, "body {}", body);
    }
}

#[tokio::test]
async fn test_resolve_link_rejects_malformed_json() {
    let app = TestApp::new();

    let (status, body) = json_body(app.post_json("/api/v1/services/link", "{\"slug\":").await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 10002);
}

#[tokio::test]
async fn test_resolve_links_preserves_order() {
    let response = server()
        .post("/api/v1/services/links")
        .json(&json!({
            "services": [
                { "slug": "a", "serviceTypeCode": "package" },
                { "id": 2 },
                { "slug": "c", "serviceType": { "code": "WORKSHOP", "name": "Course" } }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let paths: Vec<&str> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/packages/a", "/sessions/2", "/workshops/c"]);
}

#[tokio::test]
async fn test_resolve_links_non_object_items_still_resolve() {
    let response = server()
        .post("/api/v1/services/links")
        .json(&json!({ "services": [1, { "slug": "a", "serviceTypeCode": "bundle" }] }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "links": [
            { "path": "/sessions/", "label": "Book Session", "serviceType": "session" },
            { "path": "/bundles/a", "label": "View Bundle", "serviceType": "bundle" }
        ]
    }));
}

#[tokio::test]
async fn test_resolve_links_rejects_malformed_batch() {
    let app = TestApp::new();

    for body in [r#"{"services":"x"}"#, "{}", r#"[[{"slug":"a"}]]"#, r#""services""#] {
        let response = app.post_json("/api/v1/services/links", body).await;
        let (status, json) = json_body(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(json["code"], 10002, "body {}", body);
    }
}

#[tokio::test]
async fn test_resolve_links_rejects_empty_batch() {
    let response = server()
        .post("/api/v1/services/links")
        .json(&json!({ "services": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 10007);
    assert_eq!(body["errors"][0]["field"], "services");
}

#[tokio::test]
async fn test_resolve_links_rejects_oversized_batch() {
    let services: Vec<Value> = (0..=TEST_MAX_BATCH_SIZE)
        .map(|i| json!({ "id": i }))
        .collect();

    let response = server()
        .post("/api/v1/services/links")
        .json(&json!({ "services": services }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 10002);
    assert_eq!(
        body["message"],
        format!(
            "Batch of {} services exceeds the limit of {}",
            TEST_MAX_BATCH_SIZE + 1,
            TEST_MAX_BATCH_SIZE
        )
    );
}

#[tokio::test]
async fn test_cta_label() {
    let server = server();

    let response = server
        .get("/api/v1/services/cta-label")
        .add_query_param("serviceType", "workshop")
        .await;
    response.assert_json(&json!({ "label": "Reserve Spot" }));

    let response = server
        .get("/api/v1/services/cta-label")
        .add_query_param("serviceType", "")
        .await;
    response.assert_json(&json!({ "label": "View Details" }));

    let response = server.get("/api/v1/services/cta-label").await;
    response.assert_json(&json!({ "label": "View Details" }));
}

#[tokio::test]
async fn test_list_service_types() {
    let response = server().get("/api/v1/service-types").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "code": "session", "pathPrefix": "/sessions/", "label": "Book Session" },
        { "code": "workshop", "pathPrefix": "/workshops/", "label": "Reserve Spot" },
        { "code": "course", "pathPrefix": "/courses/", "label": "Start Journey" },
        { "code": "package", "pathPrefix": "/packages/", "label": "View Package" },
        { "code": "bundle", "pathPrefix": "/bundles/", "label": "View Bundle" },
        { "code": "other", "pathPrefix": "/services/", "label": "View Details" }
    ]));
}
