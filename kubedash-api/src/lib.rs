//! kubedash API Library
//!
//! Read-only dashboard backend that re-exposes a handful of Kubernetes list
//! endpoints, reached through a `kubectl proxy` gateway, to a static frontend.

// Core modules
pub mod config;
pub mod error;

// Application state
pub mod state;
pub use state::AppState;

// Kubernetes proxy client
pub mod kubernetes;

// HTTP surface
pub mod handlers;
pub mod routes;
pub use routes::build_app;

// Logging configuration
pub mod logging;

// Health checks and readiness probes
pub mod health;

// Graceful shutdown handling
pub mod shutdown;
