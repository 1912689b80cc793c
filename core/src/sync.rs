//! Drives request/response cycles and folds results into the view.
//!
//! # Design
//! Every action issues at most one request and never retries. On success
//! the server's record is applied to the [`ViewState`]. On failure the view
//! stays as last known; the error is logged and returned for the front-end
//! to ignore or show. Nothing is applied optimistically.

use crate::client::TodoClient;
use crate::error::{ApiError, SyncError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};
use crate::view::ViewState;

/// The host side of the host-does-IO split: executes one HTTP round-trip.
///
/// Non-2xx statuses are data and must come back as `Ok`; `Err` is reserved
/// for failures where no response was received.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

pub struct SyncLayer<T> {
    client: TodoClient,
    transport: T,
    view: ViewState,
}

impl<T: Transport> SyncLayer<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            view: ViewState::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the full list and replace the view with it.
    pub fn load(&mut self) -> Result<(), SyncError> {
        let result = self
            .send(self.client.build_list_todos())
            .and_then(|resp| self.client.parse_list_todos(resp));
        match result {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "loaded todos");
                self.view.replace_all(todos);
                Ok(())
            }
            Err(err) => Err(log_failure("loading todos", err.into())),
        }
    }

    /// Load only if the view has never been loaded or was invalidated.
    pub fn ensure_loaded(&mut self) -> Result<(), SyncError> {
        if self.view.is_stale() {
            self.load()?;
        }
        Ok(())
    }

    pub fn invalidate(&mut self) {
        self.view.invalidate();
    }

    /// Create a todo and append the server's copy, id included.
    pub fn add(&mut self, text: &str) -> Result<Todo, SyncError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(log_failure("adding todo", SyncError::EmptyText));
        }
        let input = CreateTodo {
            text: text.to_string(),
            completed: false,
        };
        let result = self
            .client
            .build_create_todo(&input)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_create_todo(resp));
        match result {
            Ok(todo) => {
                self.view.append(todo.clone());
                Ok(todo)
            }
            Err(err) => Err(log_failure("adding todo", err.into())),
        }
    }

    /// Send the negation of the completed flag currently shown for `id`.
    pub fn toggle(&mut self, id: u64) -> Result<Todo, SyncError> {
        let Some(current) = self.view.get(id) else {
            return Err(log_failure("toggling todo", SyncError::UnknownTodo(id)));
        };
        let patch = UpdateTodo::completed(!current.completed);
        self.apply_update(id, &patch)
            .map_err(|err| log_failure("toggling todo", err))
    }

    /// Replace the text of an open todo. Unchanged text issues no request.
    pub fn edit(&mut self, id: u64, text: &str) -> Result<Todo, SyncError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(log_failure("editing todo", SyncError::EmptyText));
        }
        let current = match self.view.get(id) {
            Some(todo) if todo.completed => {
                return Err(log_failure("editing todo", SyncError::Completed(id)));
            }
            Some(todo) => todo,
            None => return Err(log_failure("editing todo", SyncError::UnknownTodo(id))),
        };
        if current.text == text {
            return Ok(current.clone());
        }
        self.apply_update(id, &UpdateTodo::text(text))
            .map_err(|err| log_failure("editing todo", err))
    }

    /// Delete on the server, then drop the record from the view.
    pub fn remove(&mut self, id: u64) -> Result<Todo, SyncError> {
        let result = self
            .send(self.client.build_delete_todo(id))
            .and_then(|resp| self.client.parse_delete_todo(resp));
        match result {
            Ok(todo) => {
                self.view.remove(id);
                Ok(todo)
            }
            Err(err) => Err(log_failure("deleting todo", err.into())),
        }
    }

    fn apply_update(&mut self, id: u64, patch: &UpdateTodo) -> Result<Todo, SyncError> {
        let req = self.client.build_update_todo(id, patch)?;
        let todo = self.client.parse_update_todo(self.send(req)?)?;
        self.view.replace(todo.clone());
        Ok(todo)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::trace!(method = request.method.as_str(), url = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        tracing::trace!(status = response.status, "received response");
        Ok(response)
    }
}

fn log_failure(action: &str, err: SyncError) -> SyncError {
    match &err {
        SyncError::Api(api) => tracing::error!(error = %api, "error {action}"),
        local => tracing::debug!(reason = %local, "skipped {action}"),
    }
    err
}
