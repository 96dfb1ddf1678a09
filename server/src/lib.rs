//! To-do item API: list, get, and update over a pluggable store.
//!
//! # Design
//! - `store` is the persistence collaborator; `InMemoryStore` is the
//!   in-process implementation the binary uses.
//! - `service` owns the entity-to-DTO mapping and the update rules.
//! - `routes` is a thin axum layer translating HTTP calls into service calls.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;

pub use config::Config;
pub use error::ServiceError;
pub use model::{TodoItem, TodoItemDto};
pub use service::TodoItemService;
pub use store::{InMemoryStore, StoreError, TodoStore};

pub fn app<S: TodoStore + 'static>(service: TodoItemService<S>) -> Router {
    routes::router(service)
}

pub async fn run<S: TodoStore + 'static>(
    listener: TcpListener,
    service: TodoItemService<S>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}
