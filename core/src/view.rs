//! Client-side cached projection of the server's list.
//!
//! The server is authoritative. `ViewState` is replaced wholesale by a load
//! and patched with the record each successful mutation returns. There is no
//! reconciliation: concurrent edits from elsewhere only show up after the
//! next load.

use crate::types::Todo;

#[derive(Debug, Clone)]
pub struct ViewState {
    todos: Vec<Todo>,
    stale: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// An empty view that has not been loaded yet.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            stale: true,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// True until the first successful `replace_all`, and again after `invalidate`.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.stale = false;
    }

    pub fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Swap in the server's copy of a record. Returns false if the id is not
    /// displayed.
    pub fn replace(&mut self, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Drop the cached records so the next load refetches everything.
    pub fn invalidate(&mut self) {
        self.todos.clear();
        self.stale = true;
    }
}
