//! Common types shared between kubedash-api and its consumers

pub mod logs;

pub use logs::{LogOptions, DEFAULT_TAIL_LINES};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default address of a local `kubectl proxy`
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8001";

/// Kubernetes object types the dashboard lists
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Node,
    Pod,
    Deployment,
    Service,
    Namespace,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        Self::Node,
        Self::Pod,
        Self::Deployment,
        Self::Service,
        Self::Namespace,
    ];

    /// REST prefix of the API group the kind belongs to
    pub fn api_prefix(&self) -> &'static str {
        match self {
            Self::Deployment => "/apis/apps/v1",
            Self::Node | Self::Pod | Self::Service | Self::Namespace => "/api/v1",
        }
    }

    /// Lowercase plural used in REST paths
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Node => "nodes",
            Self::Pod => "pods",
            Self::Deployment => "deployments",
            Self::Service => "services",
            Self::Namespace => "namespaces",
        }
    }

    /// Whether the kind can be listed per namespace
    pub fn is_namespaced(&self) -> bool {
        matches!(self, Self::Pod | Self::Deployment | Self::Service)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.plural() == s)
            .ok_or_else(|| Error::UnknownResourceKind(s.to_string()))
    }
}

/// Shared error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
