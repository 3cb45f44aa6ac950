//! Client-side error types.

use support_core::{RequestError, ValueError};

/// Errors raised by the transport collaborator.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("remote returned status {status}: {body}")]
    Status {
        status: http::StatusCode,
        body: String,
    },
    #[error("transport error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Errors returned by operation wrappers and [`crate::SupportClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Returned when a global tracing subscriber is already installed.
#[derive(Debug, thiserror::Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LoggingError(pub String);
