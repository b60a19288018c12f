//! Server-side value verification.
//!
//! The `backend` rule is the one asynchronous piece of the crate. During a
//! synchronous validation pass it only inspects the field's cached
//! [`BackendState`]; when there is none, evaluation surfaces a
//! [`BackendRequest`] and the caller drives a single round-trip with
//! [`resolve_backend`] before re-evaluating. The transport itself is a trait
//! the caller implements; this crate ships no HTTP client.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::field::FieldDescriptor;

// ============================================================================
// WIRE CONTRACT
// ============================================================================

/// An outbound verification request for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendRequest {
    /// Field name, sent as the parameter name.
    pub field: String,
    /// Endpoint to post to.
    pub endpoint: String,
    /// The value to verify.
    pub value: String,
}

/// The expected JSON response body.
///
/// ```
/// use formcheck::backend::BackendResponse;
///
/// let response: BackendResponse =
///     serde_json::from_str(r#"{"success": false, "message": "Address is taken"}"#).unwrap();
/// assert!(!response.success);
/// assert_eq!(response.message.as_deref(), Some("Address is taken"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Cached verdict of the last round-trip for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendState {
    Accepted,
    /// Rejected; `message` is the server's explanation when it sent one.
    Rejected { message: Option<String> },
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport failure. The variants are advisory; any failure is treated the
/// same way by [`resolve_backend`].
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend request timed out")]
    Timeout,

    #[error("backend response was not valid JSON: {0}")]
    BadResponse(#[from] serde_json::Error),
}

/// How a [`BackendRequest`] reaches the server. Implemented by the caller.
pub trait BackendTransport {
    /// Posts the request and decodes the JSON body.
    fn send(
        &self,
        request: &BackendRequest,
    ) -> impl Future<Output = Result<BackendResponse, BackendError>> + Send;
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Drives one round-trip and caches the verdict on the field.
///
/// A transport failure caches `Rejected { message: None }`: the field reads
/// as unverified to the user, and the next [`FieldDescriptor::set_value`]
/// drops the cache so the check is retried after an edit.
pub async fn resolve_backend<T: BackendTransport>(
    field: &mut FieldDescriptor,
    request: &BackendRequest,
    transport: &T,
) {
    let state = match transport.send(request).await {
        Ok(BackendResponse { success: true, .. }) => BackendState::Accepted,
        Ok(BackendResponse { success: false, message }) => BackendState::Rejected { message },
        Err(err) => {
            warn!(field = %field.name, error = %err, "backend round-trip failed");
            BackendState::Rejected { message: None }
        }
    };
    field.backend_state = Some(state);
}

// ============================================================================
// TESTS
// ============================================================================
