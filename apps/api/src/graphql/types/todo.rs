//! Todo GraphQL types
//!
//! The `Todo` object plus the enums and input objects used to list, create
//! and update todos.

use async_graphql::{Enum, InputObject, Object};
use chrono::{DateTime, Utc};

use crate::models::{NewTodo, Todo as DbTodo, TodoPatch};
use crate::repositories::{SortDirection, TodoOrderField};

/// Todo item exposed via GraphQL
pub struct Todo {
    inner: DbTodo,
}

impl Todo {
    /// Create a new GraphQL Todo from a database Todo
    pub fn new(todo: DbTodo) -> Self {
        Self { inner: todo }
    }
}

impl From<DbTodo> for Todo {
    fn from(todo: DbTodo) -> Self {
        Self::new(todo)
    }
}

#[Object]
impl Todo {
    /// Unique Identifier for the Todo
    async fn id(&self) -> String {
        self.inner.id.to_string()
    }

    /// DateTime the todo was created
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// DateTime the todo was updated
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }

    /// The Todo description
    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Completed status for the Todo
    async fn completed(&self) -> bool {
        self.inner.completed
    }
}

/// Field to order the Todos by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(rename_items = "camelCase")]
pub enum OrderBy {
    CreatedAt,
    UpdatedAt,
}

impl From<OrderBy> for TodoOrderField {
    fn from(order_by: OrderBy) -> Self {
        match order_by {
            OrderBy::CreatedAt => Self::CreatedAt,
            OrderBy::UpdatedAt => Self::UpdatedAt,
        }
    }
}

/// Direction to sort the Todos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(rename_items = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(sort: SortOrder) -> Self {
        match sort {
            SortOrder::Asc => Self::Asc,
            SortOrder::Desc => Self::Desc,
        }
    }
}

/// Ordering for the todo listing as a single input object
#[derive(Debug, Clone, Default, InputObject)]
pub struct TodoOrderByInput {
    /// Field to order the todos by
    pub order_by: Option<OrderBy>,
    /// Direction to order the todos by
    pub sort: Option<SortOrder>,
}

/// Input for creating a todo
#[derive(Debug, Clone, InputObject)]
pub struct TodoCreateInput {
    /// Description for the Todo
    pub description: String,
}

impl From<TodoCreateInput> for NewTodo {
    fn from(input: TodoCreateInput) -> Self {
        NewTodo::new(input.description)
    }
}

/// Input for updating a todo
///
/// Omitted or null fields are left unchanged.
#[derive(Debug, Clone, Default, InputObject)]
pub struct TodoUpdateInput {
    /// Description for the Todo
    pub description: Option<String>,
    /// Completed status for the todo
    pub completed: Option<bool>,
}

impl From<TodoUpdateInput> for TodoPatch {
    fn from(input: TodoUpdateInput) -> Self {
        Self {
            description: input.description,
            completed: input.completed,
        }
    }
}
