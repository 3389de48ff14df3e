//! Kubernetes proxy error types and ApiError mapping

use crate::error::ApiError;
use thiserror::Error;

/// Errors raised while talking to the Kubernetes API proxy
#[derive(Debug, Error)]
pub enum K8sError {
    /// The request never produced a response
    #[error("error making request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The proxy answered with anything but 200
    #[error("received non-200 status code: {status}, body: {body}")]
    Status { status: u16, body: String },

    /// The body was not a JSON object
    #[error("error decoding response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The log body could not be read
    #[error("error reading logs: {0}")]
    ReadLogs(#[source] reqwest::Error),

    /// HTTP client could not be built
    #[error("invalid proxy client configuration: {0}")]
    InvalidClient(String),
}

impl From<K8sError> for ApiError {
    fn from(err: K8sError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Result type alias for Kubernetes operations
pub type K8sResult<T> = std::result::Result<T, K8sError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_error_message() {
        let err = K8sError::Status {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "received non-200 status code: 403, body: forbidden"
        );
    }

    #[test]
    fn test_maps_to_internal_error() {
        let err = K8sError::Status {
            status: 404,
            body: "{\"kind\":\"Status\"}".to_string(),
        };
        let api_err: ApiError = err.into();

        assert_eq!(api_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api_err.message().contains("{\"kind\":\"Status\"}"));
    }
}
