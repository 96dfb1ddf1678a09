//! Wire DTO for the todo item API.
//!
//! # Design
//! Mirrors the server's `TodoItemDto` but is defined independently so the
//! client does not depend on axum. The integration test catches schema drift.

use serde::{Deserialize, Serialize};

/// A todo item as the API exposes it. There is no way to read the server-side
/// secret through this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}
