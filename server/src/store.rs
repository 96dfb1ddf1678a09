//! Persistence collaborator for `TodoItem` records.
//!
//! # Design
//! The service only talks to `TodoStore`. `save` is a conditional update: it
//! writes only if the row still exists and reports `StoreError::Conflict`
//! otherwise, so a row removed between read and write is never resurrected.
//! Concurrent writers to a row that still exists are last-write-wins.

use std::{collections::BTreeMap, future::Future, sync::Arc};

use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::TodoItem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The record was removed since it was read.
    #[error("todo item {id} was removed concurrently")]
    Conflict { id: i64 },

    #[error("todo item {id} already exists")]
    Duplicate { id: i64 },
}

/// Storage operations for todo items.
pub trait TodoStore: Send + Sync {
    /// All records, ordered by id.
    fn list(&self) -> impl Future<Output = Result<Vec<TodoItem>, StoreError>> + Send;

    fn find(&self, id: i64) -> impl Future<Output = Result<Option<TodoItem>, StoreError>> + Send;

    /// Commit a mutated record. Fails with `Conflict` when the row is gone.
    fn save(&self, item: TodoItem) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn insert(&self, item: TodoItem) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns true if the record existed.
    fn remove(&self, id: i64) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// Shared in-process store. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rows: Arc<RwLock<BTreeMap<i64, TodoItem>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<TodoItem>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<TodoItem>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, item: TodoItem) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&item.id) {
            Some(row) => {
                *row = item;
                Ok(())
            }
            None => Err(StoreError::Conflict { id: item.id }),
        }
    }

    async fn insert(&self, item: TodoItem) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&item.id) {
            return Err(StoreError::Duplicate { id: item.id });
        }
        rows.insert(item.id, item);
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> TodoItem {
        TodoItem {
            id,
            name: name.to_string(),
            is_complete: false,
            secret: format!("Secret{id}"),
        }
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = InMemoryStore::new();
        store.insert(item(2, "Walk dog")).await.unwrap();
        store.insert(item(1, "Wash hands")).await.unwrap();

        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let store = InMemoryStore::new();
        store.insert(item(1, "Wash hands")).await.unwrap();
        let err = store.insert(item(1, "Again")).await.unwrap_err();
        assert_eq!(err, StoreError::Duplicate { id: 1 });
    }

    #[tokio::test]
    async fn save_overwrites_existing_row() {
        let store = InMemoryStore::new();
        store.insert(item(1, "Wash hands")).await.unwrap();

        let mut found = store.find(1).await.unwrap().unwrap();
        found.is_complete = true;
        store.save(found).await.unwrap();

        assert!(store.find(1).await.unwrap().unwrap().is_complete);
    }

    #[tokio::test]
    async fn interleaved_saves_on_live_row_last_write_wins() {
        let store = InMemoryStore::new();
        store.insert(item(1, "Wash hands")).await.unwrap();

        let mut first = store.find(1).await.unwrap().unwrap();
        let mut second = first.clone();
        first.name = "First".to_string();
        second.name = "Second".to_string();
        store.save(first).await.unwrap();
        store.save(second).await.unwrap();

        assert_eq!(store.find(1).await.unwrap().unwrap().name, "Second");
    }

    #[tokio::test]
    async fn save_after_remove_conflicts() {
        let store = InMemoryStore::new();
        store.insert(item(1, "Wash hands")).await.unwrap();

        let found = store.find(1).await.unwrap().unwrap();
        assert!(store.remove(1).await.unwrap());
        assert!(!store.remove(1).await.unwrap());

        let err = store.save(found).await.unwrap_err();
        assert_eq!(err, StoreError::Conflict { id: 1 });
        assert!(store.find(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clones_share_rows() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.insert(item(7, "Shared")).await.unwrap();
        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
