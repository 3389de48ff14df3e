//! Configuration management for kubedash
//!
//! Settings are resolved from (highest priority first):
//! 1. Command line flags (`--proxy`, `--port`)
//! 2. Environment variables
//! 3. Configuration file (TOML format)
//! 4. Default values

use kubedash_common::DEFAULT_PROXY_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubedashConfig {
    /// Listener and static assets
    pub server: ServerConfig,
    /// Upstream Kubernetes API proxy
    pub proxy: ProxyConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served at `/`
    pub static_dir: PathBuf,
}

/// Kubernetes API proxy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Base URL of the proxy, e.g. `http://127.0.0.1:8001`
    pub url: String,
    /// Per-request timeout; unset means wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,
    /// Directory for daily-rotated log files; console only when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROXY_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            json: false,
        }
    }
}

impl KubedashConfig {
    /// Load configuration from the first config file found, then the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_path_buf(), e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let paths = [
            std::env::var("KUBEDASH_CONFIG").ok().map(PathBuf::from),
            Some(PathBuf::from("./kubedash.toml")),
            Some(PathBuf::from("/etc/kubedash/config.toml")),
        ];

        paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply overrides read through `lookup` (the process environment in production)
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server
        if let Some(host) = lookup("KUBEDASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("KUBEDASH_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = lookup("KUBEDASH_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Proxy
        if let Some(url) = lookup("KUBEDASH_PROXY_URL") {
            self.proxy.url = url;
        }
        if let Some(secs) = lookup("KUBEDASH_PROXY_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.proxy.request_timeout_secs = Some(secs);
        }

        // Logging
        if let Some(level) = lookup("KUBEDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(dir) = lookup("KUBEDASH_LOG_DIR") {
            self.logging.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(json) = lookup("KUBEDASH_LOG_JSON") {
            self.logging.json = json.parse().unwrap_or(false);
        }
    }

    /// Apply command line flags, which win over every other source
    pub fn apply_cli_overrides(&mut self, proxy: Option<String>, port: Option<u16>) {
        if let Some(proxy) = proxy {
            self.proxy.url = proxy;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        let url = reqwest::Url::parse(&self.proxy.url).map_err(|e| {
            ConfigError::Validation(format!("Invalid proxy URL '{}': {}", self.proxy.url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "Proxy URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("Failed to read config file {0:?}: {1}")]
    FileRead(PathBuf, String),
    /// Failed to parse configuration
    #[error("Failed to parse config: {0}")]
    Parse(String),
    /// Configuration validation failed
    #[error("Config validation failed: {0}")]
    Validation(String),
}
