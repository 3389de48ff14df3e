//! Pod log request parameters

use serde::{Deserialize, Serialize};

/// Number of log lines requested when the caller does not say otherwise
pub const DEFAULT_TAIL_LINES: i64 = 100;

/// Which pod (and optionally which container) to read logs from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogOptions {
    pub namespace: String,
    pub pod: String,
    pub container: Option<String>,
    /// Only forwarded upstream when greater than zero
    pub tail_lines: i64,
}

impl LogOptions {
    pub fn new(namespace: impl Into<String>, pod: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            pod: pod.into(),
            container: None,
            tail_lines: DEFAULT_TAIL_LINES,
        }
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn with_tail_lines(mut self, tail_lines: i64) -> Self {
        self.tail_lines = tail_lines;
        self
    }

    /// Query parameters for the upstream log endpoint, in request order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(container) = self.container.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("container", container.to_string()));
        }
        if self.tail_lines > 0 {
            pairs.push(("tailLines", self.tail_lines.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LogOptions::new("default", "web-0");
        assert_eq!(opts.tail_lines, DEFAULT_TAIL_LINES);
        assert!(opts.container.is_none());
        assert_eq!(opts.query_pairs(), vec![("tailLines", "100".to_string())]);
    }

    #[test]
    fn test_container_before_tail_lines() {
        let opts = LogOptions::new("default", "web-0")
            .with_container("nginx")
            .with_tail_lines(20);
        assert_eq!(
            opts.query_pairs(),
            vec![
                ("container", "nginx".to_string()),
                ("tailLines", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_positive_tail_lines_omitted() {
        for tail in [0, -5] {
            let opts = LogOptions::new("default", "web-0").with_tail_lines(tail);
            assert!(opts.query_pairs().is_empty());
        }
    }

    #[test]
    fn test_empty_container_omitted() {
        let opts = LogOptions::new("default", "web-0")
            .with_container("")
            .with_tail_lines(0);
        assert!(opts.query_pairs().is_empty());
    }
}
