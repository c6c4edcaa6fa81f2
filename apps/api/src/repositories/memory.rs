//! In-memory todo repository
//!
//! Mirrors [`PgTodoRepository`](super::PgTodoRepository) semantics without a
//! database: ids and timestamps are assigned by the store, updates refresh
//! `updated_at`, and missing rows produce [`RepositoryError::NotFound`].
//!
//! Locks recover from poisoning so one panicking test does not cascade.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::error::{RepositoryError, RepositoryResult};
use super::ordering::TodoOrdering;
use super::todo::TodoRepository;
use crate::models::{NewTodo, Todo, TodoPatch};

#[derive(Default)]
struct MemoryState {
    todos: HashMap<Uuid, Todo>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl MemoryState {
    /// Strictly increasing clock so insertion order is observable in timestamps
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(next);
        next
    }
}

/// Todo repository backed by a shared `HashMap`
///
/// Clones share the same underlying store.
#[derive(Clone, Default)]
pub struct MemoryTodoRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryTodoRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored todos
    pub fn len(&self) -> usize {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.todos.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn find_all(&self, ordering: TodoOrdering) -> RepositoryResult<Vec<Todo>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let mut todos: Vec<Todo> = state.todos.values().cloned().collect();
        // Insertion order first, so ties under `ordering` are stable
        todos.sort_by_key(|t| t.created_at);
        ordering.sort(&mut todos);
        Ok(todos)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Todo>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state.todos.get(&id).cloned())
    }

    async fn create(&self, new: NewTodo) -> RepositoryResult<Todo> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let now = state.tick();
        let todo = Todo {
            id: Uuid::new_v4(),
            description: new.description,
            completed: new.completed,
            created_at: now,
            updated_at: now,
        };
        state.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> RepositoryResult<Todo> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let now = state.tick();
        let todo = state
            .todos
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(id))?;
        patch.apply(todo, now);
        Ok(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Todo> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state
            .todos
            .remove(&id)
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
