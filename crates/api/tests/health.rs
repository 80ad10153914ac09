//! Integration tests for the health check endpoint and general HTTP behaviour
//! (request ids, CORS, pretty JSON).

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, build_test_app, create_todo, get};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app();
    let response = get(app, "/alice/notes").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app();
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a valid UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/alice/todos")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PUT"),
        "Allow-Methods should contain PUT, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Test: ?pretty indents JSON output without changing its content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pretty_query_indents_json() {
    let app = build_test_app();
    create_todo(&app, "alice", json!({ "title": "buy milk" })).await;

    let compact = body_bytes(get(app.clone(), "/alice/todos").await).await;
    let pretty = body_bytes(get(app, "/alice/todos?pretty").await).await;

    let compact_text = String::from_utf8(compact.clone()).unwrap();
    let pretty_text = String::from_utf8(pretty.clone()).unwrap();
    assert!(!compact_text.contains('\n'));
    assert!(pretty_text.contains("\n  "));

    let compact: serde_json::Value = serde_json::from_slice(&compact).unwrap();
    let pretty: serde_json::Value = serde_json::from_slice(&pretty).unwrap();
    assert_eq!(compact, pretty);
}

#[tokio::test]
async fn pretty_query_applies_to_errors() {
    let app = build_test_app();
    let response = get(app, "/nobody/todos?pretty=true").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("\n  \"message\": \"User not found\""));
}
