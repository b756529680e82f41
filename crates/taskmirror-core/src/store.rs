//! Session-local todo state
//!
//! `LocalStore` is the single shared mutable resource of the core. It is an
//! explicitly constructed handle passed by reference to its consumers (never
//! a module-level global) and is only ever mutated through the four named
//! operations below, which keeps each mutation atomic from the perspective of
//! a single-threaded consumer.

use std::sync::{Arc, Mutex};

use taskmirror_api::Todo;

#[derive(Debug, Default)]
struct StoreState {
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
}

/// Read-only snapshot of the store for the (out-of-scope) rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    pub todos: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Shared handle to the session-local todo state.
///
/// Cloning the handle shares the underlying state; construct one per UI
/// session and inject it into every consumer.
#[derive(Clone, Default)]
pub struct LocalStore {
    state: Arc<Mutex<StoreState>>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection verbatim.
    ///
    /// A full resync discards any local-only state; no merging with the prior
    /// collection happens here.
    pub fn set_todos(&self, todos: Vec<Todo>) {
        tracing::debug!(count = todos.len(), "replacing todo collection");
        self.state.lock().unwrap().todos = todos;
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.lock().unwrap().loading = loading;
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.lock().unwrap().error = error;
    }

    /// Replace the record whose `id` matches `todo`.
    ///
    /// If no record matches, the collection is left unchanged; a late
    /// mutation result for a record that has since left the collection is not
    /// an error.
    pub fn update_todo(&self, todo: Todo) {
        let mut state = self.state.lock().unwrap();
        match state.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => *slot = todo,
            None => {
                tracing::debug!(id = %todo.id, "update for unknown id ignored");
            }
        }
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.state.lock().unwrap().todos.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    /// Observe all three fields in one consistent snapshot
    pub fn view(&self) -> TodoListView {
        let state = self.state.lock().unwrap();
        TodoListView {
            todos: state.todos.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("LocalStore")
            .field("todo_count", &state.todos.len())
            .field("loading", &state.loading)
            .field("error", &state.error)
            .finish()
    }
}
