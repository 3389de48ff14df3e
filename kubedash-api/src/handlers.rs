//! HTTP handlers for the dashboard API
//!
//! Each handler reads its query parameters, makes exactly one call on the
//! proxy client and writes the result back unchanged.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use kubedash_common::{LogOptions, DEFAULT_TAIL_LINES};
use serde::Deserialize;

use crate::error::ApiError;
use crate::health::ReadinessResponse;
use crate::kubernetes::ResourceList;
use crate::state::AppState;

/// Optional `?namespace=` filter
#[derive(Debug, Default, Deserialize)]
pub struct NamespaceQuery {
    pub namespace: Option<String>,
}

impl NamespaceQuery {
    /// An empty value means "all namespaces"
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}

/// Query parameters of `/api/logs`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsQuery {
    pub namespace: Option<String>,
    pub pod: Option<String>,
    pub container: Option<String>,
    /// Kept as text so a malformed value falls back to the default
    pub tail_lines: Option<String>,
}

impl LogsQuery {
    pub fn into_log_options(self) -> Result<LogOptions, ApiError> {
        let namespace = self.namespace.filter(|ns| !ns.is_empty());
        let pod = self.pod.filter(|pod| !pod.is_empty());

        let (Some(namespace), Some(pod)) = (namespace, pod) else {
            return Err(ApiError::missing_params(
                "namespace and pod name are required",
            ));
        };

        let tail_lines = parse_tail_lines(self.tail_lines.as_deref());
        let mut opts = LogOptions::new(namespace, pod).with_tail_lines(tail_lines);
        if let Some(container) = self.container.filter(|c| !c.is_empty()) {
            opts = opts.with_container(container);
        }

        Ok(opts)
    }
}

/// Lenient `tailLines` parsing: anything that is not an integer means the default
pub fn parse_tail_lines(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(DEFAULT_TAIL_LINES)
}

pub async fn list_nodes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResourceList>, ApiError> {
    let nodes = state.client.list_nodes().await?;
    Ok(Json(nodes))
}

pub async fn list_pods(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NamespaceQuery>,
) -> Result<Json<ResourceList>, ApiError> {
    let pods = state.client.list_pods(query.namespace()).await?;
    Ok(Json(pods))
}

pub async fn list_deployments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NamespaceQuery>,
) -> Result<Json<ResourceList>, ApiError> {
    let deployments = state.client.list_deployments(query.namespace()).await?;
    Ok(Json(deployments))
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NamespaceQuery>,
) -> Result<Json<ResourceList>, ApiError> {
    let services = state.client.list_services(query.namespace()).await?;
    Ok(Json(services))
}

pub async fn list_namespaces(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResourceList>, ApiError> {
    let namespaces = state.client.list_namespaces().await?;
    Ok(Json(namespaces))
}

pub async fn get_pod_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let opts = query.into_log_options()?;
    let logs = state.client.pod_logs(&opts).await?;
    Ok(([(header::CONTENT_TYPE, "text/plain")], logs))
}

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness probe: 503 while the Kubernetes API proxy is unreachable
pub async fn readiness_probe(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let proxy = state.health.check_proxy(&state.client).await;
    let response = state.health.readiness(vec![proxy]);

    let status = if response.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}
