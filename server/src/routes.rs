use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::ServiceError;
use crate::model::TodoItemDto;
use crate::service::TodoItemService;
use crate::store::TodoStore;

type Service<S> = Arc<TodoItemService<S>>;

pub fn router<S: TodoStore + 'static>(service: TodoItemService<S>) -> Router {
    Router::new()
        .route("/items", get(list_items::<S>))
        .route("/items/{id}", get(get_item::<S>).put(update_item::<S>))
        .with_state(Arc::new(service))
}

async fn list_items<S: TodoStore + 'static>(
    State(service): State<Service<S>>,
) -> Result<Json<Vec<TodoItemDto>>, ServiceError> {
    service.list().await.map(Json)
}

async fn get_item<S: TodoStore + 'static>(
    State(service): State<Service<S>>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItemDto>, ServiceError> {
    service.get(id).await.map(Json)
}

async fn update_item<S: TodoStore + 'static>(
    State(service): State<Service<S>>,
    Path(id): Path<i64>,
    Json(dto): Json<TodoItemDto>,
) -> Result<StatusCode, ServiceError> {
    service.update(id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
