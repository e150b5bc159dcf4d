//! Installs the global Prometheus recorder, so it lives in its own test binary.

mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;
use todo_service::services::{get_metrics, init_metrics, record_todo_operation};

#[tokio::test]
async fn recorded_metrics_are_rendered() {
    init_metrics().expect("Failed to install recorder");

    record_todo_operation("create");

    let app = TestApp::spawn();
    let (status, _) = app.create(json!({ "data": "buy milk" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.request(Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);

    let rendered = get_metrics();
    assert!(rendered.contains("todo_operations_total"), "{rendered}");
    assert!(rendered.contains(r#"operation="create""#), "{rendered}");
    assert!(rendered.contains("http_requests_total"), "{rendered}");
    assert!(rendered.contains(r#"path="/api/todos""#), "{rendered}");
    assert!(rendered.contains("http_request_duration_seconds"), "{rendered}");

    // Installing twice is reported, not a panic.
    assert!(init_metrics().is_err());
}
