//! Stateless HTTP request builder and response parser for the to-do API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

const TODOS_PATH: &str = "/api/todos";

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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.with_json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.with_json(HttpMethod::Put, self.item_url(id), body))
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    /// The server echoes the removed record.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    fn collection_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}{TODOS_PATH}/{id}", self.base_url)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(&self, method: HttpMethod, path: String, body: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|body| body.error)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::Validation(message))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
