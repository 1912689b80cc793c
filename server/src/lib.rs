//! HTTP server for a single in-memory to-do list.
//!
//! # Overview
//! Exposes create/list/update/delete over JSON at `/api/todos`. All state lives
//! in a [`Store`] owned by the router and is lost when the process exits.

pub mod config;
pub mod error;
pub mod model;
pub mod store;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use error::{ApiError, StoreError};
pub use model::{CreateTodo, Todo, UpdateTodo};
pub use store::{SharedStore, Store};

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(Store::new().shared())
}

/// Router over an existing store handle.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let store = store.read().await;
    tracing::info!(count = store.len(), "listing todos");
    Json(store.list().to_vec())
}

async fn create_todo(
    State(store): State<SharedStore>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = body?;
    let text = input.text.as_ref().and_then(Value::as_str).unwrap_or_default();
    let todo = store.write().await.create(text, input.completed)?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(store): State<SharedStore>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let store = store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

async fn update_todo(
    State(store): State<SharedStore>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let mut store = store.write().await;
    // an unknown id wins over a bad body
    store.get(id)?;
    let Json(patch) = body?;
    let todo = store.update(id, patch)?;
    tracing::info!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let todo = store.write().await.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(Json(todo))
}
