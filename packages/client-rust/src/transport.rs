//! Seam to the HTTP transport that signs and sends request descriptors.

use async_trait::async_trait;
use support_core::RequestDescriptor;

use crate::error::TransportError;

/// Dispatches a [`RequestDescriptor`] to `endpoint` and returns the decoded
/// JSON response body.
///
/// Implementations own signing, retries, timeouts and connection handling.
/// The response is passed back to the caller unmodified.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(
        &self,
        endpoint: &str,
        request: RequestDescriptor,
    ) -> Result<serde_json::Value, TransportError>;
}
