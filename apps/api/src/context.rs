//! Per-request GraphQL context
//!
//! Every GraphQL request gets a [`TodoContext`] attached to its request data.
//! It carries the repository handle and nothing else.

use std::sync::Arc;

use crate::repositories::TodoRepository;

/// Context object exposed to resolvers
#[derive(Clone)]
pub struct TodoContext {
    todos: Arc<dyn TodoRepository>,
}

impl TodoContext {
    /// Wrap a repository handle
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    /// The todo repository
    pub fn todos(&self) -> &dyn TodoRepository {
        self.todos.as_ref()
    }
}

/// Build the context for a single request
pub fn create_context(todos: &Arc<dyn TodoRepository>) -> TodoContext {
    TodoContext::new(Arc::clone(todos))
}
