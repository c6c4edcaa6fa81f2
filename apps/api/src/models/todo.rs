//! Todo models
//!
//! Row type for the `todos` table plus the insert and patch payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Todo record from the todos table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    /// Unique identifier, generated by the database
    pub id: Uuid,

    /// Free-form description
    pub description: Option<String>,

    /// Completed status
    pub completed: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Data for inserting a new todo
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewTodo {
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTodo {
    /// An incomplete todo with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            completed: false,
        }
    }

    /// Set the completed flag
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Partial update for an existing todo
///
/// `None` leaves the column unchanged. `Some(false)` and `Some(String::new())`
/// are real values and are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Apply the patch to an in-memory todo, refreshing `updated_at`
    pub fn apply(self, todo: &mut Todo, now: DateTime<Utc>) {
        if let Some(description) = self.description {
            todo.description = Some(description);
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        // Keep updated_at monotonic even if the clock steps backwards
        todo.updated_at = now.max(todo.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> Todo {
        let created = Utc::now() - Duration::minutes(5);
        Todo {
            id: Uuid::new_v4(),
            description: Some("write tests".to_string()),
            completed: true,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_new_todo_defaults_incomplete() {
        let new = NewTodo::new("Example Todo");
        assert_eq!(new.description.as_deref(), Some("Example Todo"));
        assert!(!new.completed);
        assert!(NewTodo::new("x").completed(true).completed);
    }

    #[test]
    fn test_apply_writes_falsy_values() {
        let mut todo = sample();
        let patch = TodoPatch {
            description: Some(String::new()),
            completed: Some(false),
        };
        let now = Utc::now();
        patch.apply(&mut todo, now);

        assert_eq!(todo.description.as_deref(), Some(""));
        assert!(!todo.completed);
        assert_eq!(todo.updated_at, now);
    }

    #[test]
    fn test_apply_leaves_omitted_fields() {
        let mut todo = sample();
        TodoPatch::default().apply(&mut todo, Utc::now());

        assert_eq!(todo.description.as_deref(), Some("write tests"));
        assert!(todo.completed);
        assert!(todo.updated_at >= todo.created_at);
    }
}
