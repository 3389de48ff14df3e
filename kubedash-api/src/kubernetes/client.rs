//! HTTP client for the Kubernetes API proxy
//!
//! One method per resource kind, all funnelled through a shared
//! GET-and-decode helper. No retries and no caching: every call is exactly
//! one outbound request.

use std::time::Duration;

use kubedash_common::{LogOptions, ResourceKind, DEFAULT_PROXY_URL};
use reqwest::StatusCode;
use tracing::debug;
use urlencoding::encode;

use super::error::{K8sError, K8sResult};
use crate::config::ProxyConfig;

/// Untyped JSON object as returned by the API server (usually a `*List`)
pub type ResourceList = serde_json::Map<String, serde_json::Value>;

/// Client for a `kubectl proxy`-style gateway
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    http: reqwest::Client,
}

impl ProxyClient {
    /// Create a client with reqwest defaults (no request timeout)
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from the proxy section of the configuration
    pub fn from_config(config: &ProxyConfig) -> K8sResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| K8sError::InvalidClient(e.to_string()))?;

        Ok(Self {
            base_url: normalize_base_url(&config.url),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all nodes in the cluster
    pub async fn list_nodes(&self) -> K8sResult<ResourceList> {
        self.list(ResourceKind::Node, None).await
    }

    /// List pods in a namespace, or across all namespaces when none is given
    pub async fn list_pods(&self, namespace: Option<&str>) -> K8sResult<ResourceList> {
        self.list(ResourceKind::Pod, namespace).await
    }

    /// List deployments in a namespace, or across all namespaces when none is given
    pub async fn list_deployments(&self, namespace: Option<&str>) -> K8sResult<ResourceList> {
        self.list(ResourceKind::Deployment, namespace).await
    }

    /// List services in a namespace, or across all namespaces when none is given
    pub async fn list_services(&self, namespace: Option<&str>) -> K8sResult<ResourceList> {
        self.list(ResourceKind::Service, namespace).await
    }

    /// List all namespaces
    pub async fn list_namespaces(&self) -> K8sResult<ResourceList> {
        self.list(ResourceKind::Namespace, None).await
    }

    pub async fn list(
        &self,
        kind: ResourceKind,
        namespace: Option<&str>,
    ) -> K8sResult<ResourceList> {
        self.get_json(&resource_path(kind, namespace)).await
    }

    /// Fetch the API server version object, used as a reachability probe
    pub async fn version(&self) -> K8sResult<ResourceList> {
        self.get_json("/version").await
    }

    /// Fetch the most recent log lines of a pod as raw text
    pub async fn pod_logs(&self, opts: &LogOptions) -> K8sResult<String> {
        let response = self.get(&pod_log_path(opts)).await?;
        response.text().await.map_err(K8sError::ReadLogs)
    }

    async fn get_json(&self, path: &str) -> K8sResult<ResourceList> {
        let response = self.get(path).await?;
        response.json::<ResourceList>().await.map_err(K8sError::Decode)
    }

    /// Issue the GET and reject anything but 200
    async fn get(&self, path: &str) -> K8sResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Proxy request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| K8sError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            debug!(url = %url, status = status.as_u16(), "Proxy returned error status");
            return Err(K8sError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let base_url = if base_url.is_empty() {
        DEFAULT_PROXY_URL
    } else {
        base_url
    };
    base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}

/// REST path listing `kind`, scoped to `namespace` when the kind supports it
pub fn resource_path(kind: ResourceKind, namespace: Option<&str>) -> String {
    let namespace = namespace.filter(|ns| !ns.is_empty() && kind.is_namespaced());

    match namespace {
        Some(ns) => format!(
            "{}/namespaces/{}/{}",
            kind.api_prefix(),
            encode(ns),
            kind.plural()
        ),
        None => format!("{}/{}", kind.api_prefix(), kind.plural()),
    }
}

/// REST path (with query string) of a pod's log subresource
pub fn pod_log_path(opts: &LogOptions) -> String {
    let path = format!(
        "/api/v1/namespaces/{}/pods/{}/log",
        encode(&opts.namespace),
        encode(&opts.pod)
    );

    let query = opts
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, encode(&value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}
