//! List/get/update operations over a `TodoStore`.
//!
//! # Design
//! The service is the only place entities become DTOs. Updates are
//! check-then-act: the existence check gives a clean `NotFound` for ids that
//! were never there, and a `Conflict` from the save (the row vanished in
//! between) is reported as `NotFound` as well.

use tracing::{debug, instrument, warn};

use crate::error::ServiceError;
use crate::model::TodoItemDto;
use crate::store::{StoreError, TodoStore};

#[derive(Debug)]
pub struct TodoItemService<S> {
    store: S,
}

impl<S: TodoStore> TodoItemService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<TodoItemDto>, ServiceError> {
        let items = self.store.list().await?;
        debug!(count = items.len(), "listed todo items");
        Ok(items.iter().map(TodoItemDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<TodoItemDto, ServiceError> {
        let item = self
            .store
            .find(id)
            .await?
            .ok_or(ServiceError::NotFound { id })?;
        Ok(TodoItemDto::from(&item))
    }

    #[instrument(skip(self, dto), fields(body_id = dto.id))]
    pub async fn update(&self, id: i64, dto: TodoItemDto) -> Result<(), ServiceError> {
        if dto.id != id {
            return Err(ServiceError::BadRequest {
                path_id: id,
                body_id: dto.id,
            });
        }

        let mut item = self
            .store
            .find(id)
            .await?
            .ok_or(ServiceError::NotFound { id })?;
        item.apply(&dto);

        match self.store.save(item).await {
            Ok(()) => {
                debug!("updated todo item");
                Ok(())
            }
            Err(StoreError::Conflict { id }) => {
                warn!(id, "todo item removed during update");
                Err(ServiceError::NotFound { id })
            }
            Err(err) => Err(err.into()),
        }
    }
}
