//! Liveness and readiness probes
//!
//! The server is alive as long as it answers; it is ready once the
//! Kubernetes API proxy answers `/version`.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::kubernetes::ProxyClient;

/// Health of a single dependency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    pub message: Option<String>,
    pub latency_ms: Option<u64>,
}

/// Readiness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub reason: Option<String>,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: i64,
    pub components: Vec<ComponentHealth>,
}

/// Health checker for the server and its upstream
pub struct HealthChecker {
    start_time: Instant,
    version: String,
}

impl HealthChecker {
    pub fn new(version: &str) -> Self {
        Self {
            start_time: Instant::now(),
            version: version.to_string(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check that the Kubernetes API proxy answers
    pub async fn check_proxy(&self, client: &ProxyClient) -> ComponentHealth {
        let start = Instant::now();

        match client.version().await {
            Ok(version) => {
                let git_version = version
                    .get("gitVersion")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown");

                ComponentHealth {
                    name: "kubernetes-proxy".to_string(),
                    status: HealthStatus::Healthy,
                    message: Some(format!("Connected, server {}", git_version)),
                    latency_ms: Some(start.elapsed().as_millis() as u64),
                }
            }
            Err(e) => ComponentHealth {
                name: "kubernetes-proxy".to_string(),
                status: HealthStatus::Unhealthy,
                message: Some(format!("Proxy unreachable: {}", e)),
                latency_ms: Some(start.elapsed().as_millis() as u64),
            },
        }
    }

    /// Ready when every component is healthy
    pub fn readiness(&self, components: Vec<ComponentHealth>) -> ReadinessResponse {
        let unhealthy: Vec<&str> = components
            .iter()
            .filter(|c| c.status != HealthStatus::Healthy)
            .map(|c| c.name.as_str())
            .collect();

        let reason = if unhealthy.is_empty() {
            None
        } else {
            Some(format!("Not ready: {}", unhealthy.join(", ")))
        };

        ReadinessResponse {
            ready: reason.is_none(),
            reason,
            version: self.version.clone(),
            uptime_seconds: self.uptime_seconds(),
            timestamp: chrono::Utc::now().timestamp(),
            components,
        }
    }
}
