//! Authoritative in-memory collection of todos.
//!
//! # Design
//! `Store` is a plain owned value with no interior locking. The router wraps it
//! in [`SharedStore`] and each handler holds the write guard for the whole
//! operation, so a request's mutation never interleaves with another's.
//! Nothing is persisted; dropping the store discards every record.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::{Todo, UpdateTodo};

/// Handle injected into every handler through axum `State`.
pub type SharedStore = Arc<RwLock<Store>>;

/// Ordered todo records plus the next id to hand out.
///
/// Ids start at 1, grow by one per create, and are never reused after a delete.
#[derive(Debug)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: u64) -> Result<&Todo, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new record. The id counter only advances on success.
    pub fn create(&mut self, text: &str, completed: bool) -> Result<Todo, StoreError> {
        require_text(text)?;
        let todo = Todo {
            id: self.next_id,
            text: text.to_string(),
            completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Apply the fields present in `patch`. Absent fields keep their value.
    pub fn update(&mut self, id: u64, patch: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if let Some(text) = &patch.text {
            require_text(text)?;
        }
        if let Some(text) = patch.text {
            todo.text = text;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<Todo, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.todos.remove(index))
    }
}

fn require_text(text: &str) -> Result<(), StoreError> {
    if text.trim().is_empty() {
        return Err(StoreError::EmptyText);
    }
    Ok(())
}
