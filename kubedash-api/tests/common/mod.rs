//! Common test utilities and helpers

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use kubedash_api::kubernetes::ProxyClient;
use kubedash_api::{build_app, AppState};
use tower::ServiceExt;
use wiremock::MockServer;

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Router wired to the given proxy, serving static files from `static_dir`
pub fn app_with_static(proxy_url: &str, static_dir: &Path) -> Router {
    let state = Arc::new(AppState::new(ProxyClient::new(proxy_url)));
    build_app(state, static_dir)
}

/// Router wired to a mock Kubernetes API proxy
pub fn app_for(proxy: &MockServer) -> Router {
    app_with_static(&proxy.uri(), Path::new("./static"))
}

/// URL of a proxy that refuses connections
pub async fn unreachable_proxy_url() -> String {
    let server = MockServer::start().await;
    server.uri()
}

/// Send a GET through the router and collect the full response
pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Requests the mock proxy has seen so far
pub async fn upstream_requests(proxy: &MockServer) -> Vec<wiremock::Request> {
    proxy
        .received_requests()
        .await
        .expect("Request recording is enabled by default")
}
