//! Error types for value normalization, recasing, and request construction.

/// Errors from building or normalizing a [`crate::Value`].
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("value has no JSON representation: {0}")]
    Unrepresentable(#[source] serde_json::Error),
    #[error("cannot insert a key into a {kind} value")]
    NotAMap { kind: &'static str },
}

/// Errors from the key-recasing engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecaseError {
    /// Two keys of the same map produce the same wire key.
    #[error("keys `{first}` and `{second}` both recase to `{wire_key}`")]
    KeyCollision {
        wire_key: String,
        first: String,
        second: String,
    },
}

/// Errors from assembling a [`crate::RequestDescriptor`].
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Recase(#[from] RecaseError),
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error("request payload must be a map, got {kind}")]
    PayloadNotObject { kind: &'static str },
    #[error("non-finite number at `{path}` has no JSON encoding")]
    NonFiniteNumber { path: String },
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("invalid http request: {0}")]
    Http(#[from] http::Error),
}

/// Returned when parsing a name outside the operation catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {name}")]
pub struct UnknownOperation {
    pub name: String,
}
