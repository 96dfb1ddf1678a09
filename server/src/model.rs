//! Persisted entity and its externally visible projection.
//!
//! # Design
//! `TodoItem` is what the store holds; `TodoItemDto` is what crosses the HTTP
//! boundary. The mapping between them is explicit: `From<&TodoItem>` projects
//! out the secret, and `TodoItem::apply` writes a DTO back without touching it.

use serde::{Deserialize, Serialize};

/// A to-do record as stored. `secret` never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
    pub secret: String,
}

impl TodoItem {
    /// Overwrite the DTO-visible fields. The id and secret are left as-is.
    pub fn apply(&mut self, dto: &TodoItemDto) {
        self.name = dto.name.clone();
        self.is_complete = dto.is_complete;
    }
}

/// Transfer shape for `TodoItem`, serialized with camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

impl From<&TodoItem> for TodoItemDto {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            is_complete: item.is_complete,
        }
    }
}
