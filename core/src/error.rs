//! Error types for the REST client and views.
//!
//! # Design
//! Views render every variant the same way: as the inline error text of the
//! affected channel, via `Display`. The variants exist for the client's own
//! callers and for logging. `NotFound` keeps a dedicated variant because a
//! missing post on update/delete is the common failure of the CRUD form.

use thiserror::Error;

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The host could not complete the round-trip (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialize(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(String),
}
