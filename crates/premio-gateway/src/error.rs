//! Gateway client error types.
//!
//! These errors only exist inside the client. The public operations on
//! [`GatewayClient`](crate::GatewayClient) catch every one of them and return
//! a fail-closed outcome instead; the `try_*` methods expose them for callers
//! that want the underlying cause.

/// Errors from calls to the remote scripting endpoint.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The endpoint returned a non-2xx status.
    #[error("gateway {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
