//! Error types for the todo item client.
//!
//! # Design
//! The two statuses the API uses to reject a request, 404 and 400, get their
//! own variants. Any other unexpected status lands in `HttpError` with the raw
//! body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: no such item, or it disappeared while being updated.
    #[error("resource not found")]
    NotFound,

    /// 400: the body id did not match the path id, or the id was malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
