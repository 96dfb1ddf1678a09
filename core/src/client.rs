//! Stateless HTTP request builder and response parser for the todo item API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::TodoItemDto;

/// Synchronous, stateless client for the todo item API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/items", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/items/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The path id and `item.id` are sent as given; the server rejects a
    /// mismatch with 400.
    pub fn build_update_item(
        &self,
        id: i64,
        item: &TodoItemDto,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(item).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/items/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<TodoItemDto>, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<TodoItemDto, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest(response.body.clone())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
