//! Service-level errors and their HTTP mapping.
//!
//! # Design
//! `NotFound` covers both "no such record" and "record vanished while we were
//! updating it"; callers cannot act differently on the two, so they share a
//! variant. Store failures other than a conflict are opaque to clients and
//! map to 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("todo item {id} not found")]
    NotFound { id: i64 },

    #[error("path id {path_id} does not match body id {body_id}")]
    BadRequest { path_id: i64, body_id: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            ServiceError::BadRequest { .. } => StatusCode::BAD_REQUEST.into_response(),
            ServiceError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
