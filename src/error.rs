//! Error types.
//!
//! One public enum covers every failure class of a call: local
//! configuration and validation problems, wire encoding, transport
//! failures, non-success statuses, and undecodable success bodies. Nothing
//! here is fatal and nothing is retried; every error is a value handed back
//! to the caller uninterpreted.
//!
//! `Status` and `Decode` keep the [`ResponseMeta`] envelope, so status,
//! headers and pagination metadata stay inspectable on failure. `Transport`
//! carries no envelope because no response was received.

use std::time::Duration;

use crate::types::ResponseMeta;

/// Errors produced by the client.
#[derive(Debug, thiserror::Error)]
pub enum GitLabError {
    /// The client configuration is unusable: unset or malformed endpoint
    /// URL, invalid header material, or a transport that failed to build.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Locally detectable bad input, reported before any network I/O.
    #[error("validation error: {0}")]
    Validation(String),

    /// Request parameters could not be serialized into the wire format.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Connection-level failure (DNS, reset, timeout); no response exists.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("api error (status {}): {}", meta.status, message.as_deref().unwrap_or("no error message"))]
    Status {
        /// Envelope of the failed response.
        meta: ResponseMeta,
        /// Structured error message extracted from the body, when present.
        message: Option<String>,
    },

    /// Success status, but the body did not match the expected shape.
    #[error("decode error (status {}): {message}", meta.status)]
    Decode {
        /// Envelope of the response whose body failed to decode.
        meta: ResponseMeta,
        message: String,
    },
}

impl GitLabError {
    /// The HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        self.meta().map(|meta| meta.status)
    }

    /// The response envelope, when one was received.
    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            Self::Status { meta, .. } | Self::Decode { meta, .. } => Some(meta),
            _ => None,
        }
    }

    /// Whether the service rejected the call for rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Whether the service rejected the credentials or permissions.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Whether retrying the call could plausibly succeed. The client never
    /// retries on its own; this only informs the caller's policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { meta, .. } => meta.status == 429 || meta.status >= 500,
            _ => false,
        }
    }

    /// The wait the service asked for on a rate-limited response, parsed
    /// from its `retry-after` header (seconds form).
    pub fn retry_after(&self) -> Option<Duration> {
        let meta = self.meta()?;
        let seconds: u64 = meta.headers.get("retry-after")?.to_str().ok()?.trim().parse().ok()?;
        Some(Duration::from_secs(seconds))
    }
}

/// Extract a human-readable message from a structured error body.
///
/// The service reports errors as `{"message": ...}` or `{"error": ...}`;
/// `message` is sometimes a nested object or array (field-level validation
/// failures), which is surfaced in its JSON form.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message").or_else(|| value.get("error"))?;
    match message {
        serde_json::Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
