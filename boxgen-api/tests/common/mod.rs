//! Common test utilities and helpers for boxgen-api tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use boxgen_api::{create_app, AppState};
use boxgen_provider::{mock::MockProvisioner, Provisioner};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Create an app writing into `work_dir` and provisioning with `provisioner`
pub fn create_test_app(work_dir: &Path, provisioner: Arc<dyn Provisioner>) -> Router {
    create_app(AppState::with_provisioner(work_dir.to_path_buf(), provisioner))
}

/// Create an app backed by a recording mock; the mock is returned for assertions
pub fn create_mock_app(work_dir: &Path) -> (Router, Arc<MockProvisioner>) {
    let mock = Arc::new(MockProvisioner::new());
    (create_test_app(work_dir, mock.clone()), mock)
}

/// The descriptor used throughout the examples
pub fn focal_box() -> Value {
    json!({
        "name": "ubuntu/focal64",
        "hostname": "box1",
        "cpu": 2,
        "memory": 1024,
        "ip_address": "192.168.56.10",
        "network_type": "private_network"
    })
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// POST a raw body to /generate
pub async fn post_generate(app: Router, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

/// POST a JSON value to /generate
pub async fn post_generate_json(app: Router, value: &Value) -> Response<Body> {
    post_generate(app, serde_json::to_string(value).unwrap()).await
}

/// Helper to extract a plain-text body from an axum response
pub async fn extract_text_body(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(body.to_vec()).expect("Response body is not UTF-8")
}

/// Helper to extract JSON body from axum response
pub async fn extract_json_body<T>(response: Response<Body>) -> T
where
    T: serde::de::DeserializeOwned,
{
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&body).expect("Failed to deserialize JSON")
}
