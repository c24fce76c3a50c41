use thiserror::Error;

use super::types::Operation;

/// Failure of a single remote operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL could not be parsed as an absolute URL.
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Transport level failure: connect, send or body read.
    #[error("{operation}: network error: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx status; only produced when strict status checking is on.
    #[error("{operation}: HTTP {status}: {body}")]
    Status {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// Body was not the JSON we expected.
    #[error("{operation}: invalid JSON in response: {source}")]
    Parse {
        operation: Operation,
        status: Option<u16>,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short machine-friendly kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Network { .. } => "network",
            ApiError::Status { .. } => "http_status",
            ApiError::Parse { .. } => "parse",
        }
    }
}
