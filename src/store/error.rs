//! Error types for requests against the record store.

use thiserror::Error;

/// Errors that can occur while talking to the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Base URL or access key missing; no request was sent.
    #[error("Store not configured: {reason}")]
    NotConfigured { reason: String },

    /// The request could not be built (bad URL, bad header value).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure: DNS, TLS, connection refused, reset.
    #[error("Connection to store failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-2xx status.
    #[error("HTTP error! status: {status} - {message}")]
    Status { status: u16, message: String },

    /// A 2xx body that is not the JSON shape the caller expected.
    #[error("Invalid response from store: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// HTTP status carried by a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable classification, used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            StoreError::NotConfigured { .. } => "not_configured",
            StoreError::InvalidRequest(_) => "invalid_request",
            StoreError::Transport { .. } => "transport_error",
            StoreError::Status { .. } => "status_error",
            StoreError::Decode { .. } => "decode_error",
        }
    }

    /// Build a `Status` error from a response body.
    ///
    /// PostgREST error objects carry a `message` field; anything else is
    /// kept verbatim. An empty body falls back to the status reason phrase.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());

        let message = if message.is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown status")
                .to_string()
        } else {
            message
        };

        StoreError::Status { status, message }
    }
}
