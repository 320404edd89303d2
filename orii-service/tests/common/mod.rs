//! Shared helpers for orii-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use orii_service::config::OriiConfig;
use orii_service::startup::{build_router, Application};
use service_core::config::Config;
use std::time::Duration;
use tower::ServiceExt;

/// Loopback config on a random port.
pub fn test_config() -> OriiConfig {
    OriiConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Config::default()
        },
        ..OriiConfig::default()
    }
}

pub fn router() -> Router {
    build_router(&test_config())
}

/// Spawn the application on a random port and return its base URL.
pub async fn spawn_app() -> String {
    let app = Application::build(test_config())
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://127.0.0.1:{}", port)
}

pub async fn get(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// POST a raw body, with the given `Content-Type` or none at all.
pub async fn post_raw(
    router: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    router
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Body is not JSON")
}
