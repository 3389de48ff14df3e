//! Kubernetes API access through a `kubectl proxy` gateway
//!
//! The proxy handles TLS and authentication towards the control plane, so
//! every call here is a plain unauthenticated GET against the standard REST
//! paths (`/api/v1/...`, `/apis/apps/v1/...`).

pub mod client;
pub mod error;

pub use client::{pod_log_path, resource_path, ProxyClient, ResourceList};
pub use error::{K8sError, K8sResult};
