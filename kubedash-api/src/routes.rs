//! Route table

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Kubernetes resource routes
pub fn kubernetes_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/nodes", get(handlers::list_nodes))
        .route("/api/pods", get(handlers::list_pods))
        .route("/api/deployments", get(handlers::list_deployments))
        .route("/api/services", get(handlers::list_services))
        .route("/api/namespaces", get(handlers::list_namespaces))
        .route("/api/logs", get(handlers::get_pod_logs))
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/health/ready", get(handlers::readiness_probe))
}

/// Full application: API routes, then the static frontend as fallback
pub fn build_app(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .merge(kubernetes_routes())
        .merge(health_routes())
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
