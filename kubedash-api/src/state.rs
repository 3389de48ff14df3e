//! Application State
//!
//! Shared state for the kubedash server

use std::sync::Arc;

use crate::health::HealthChecker;
use crate::kubernetes::ProxyClient;

/// State handed to every handler
///
/// Nothing in here is mutated after startup; handlers only read.
#[derive(Clone)]
pub struct AppState {
    pub client: ProxyClient,
    pub health: Arc<HealthChecker>,
}

impl AppState {
    pub fn new(client: ProxyClient) -> Self {
        Self {
            client,
            health: Arc::new(HealthChecker::new(env!("CARGO_PKG_VERSION"))),
        }
    }
}
