//! Todo queries
//!
//! - allTodos: every todo, incomplete first, optionally ordered by a timestamp
//! - todoById: a single todo, or null

use async_graphql::{Context, Object, Result};

use crate::context::TodoContext;
use crate::graphql::parse_todo_id;
use crate::graphql::types::{OrderBy, SortOrder, Todo, TodoOrderByInput};
use crate::repositories::TodoOrdering;

/// Todo-related queries
#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    /// Query for all todos
    ///
    /// Incomplete todos come first. Within each group the todos follow
    /// `orderBy` in `sort` direction (ascending by default). `order` carries
    /// the same two settings as an input object; explicit arguments win.
    async fn all_todos(
        &self,
        ctx: &Context<'_>,
        order_by: Option<OrderBy>,
        sort: Option<SortOrder>,
        order: Option<TodoOrderByInput>,
    ) -> Result<Vec<Todo>> {
        let order = order.unwrap_or_default();
        let ordering = TodoOrdering::from_parts(
            order_by.or(order.order_by).map(Into::into),
            sort.or(order.sort).map(Into::into),
        );

        let todos = ctx.data::<TodoContext>()?.todos().find_all(ordering).await?;
        tracing::debug!(count = todos.len(), %ordering, "Listed todos");

        Ok(todos.into_iter().map(Todo::from).collect())
    }

    /// Get a todo by ID
    ///
    /// Returns null when the id is omitted or no todo has it.
    async fn todo_by_id(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Todo>> {
        let Some(uuid) = id.as_deref().and_then(parse_todo_id) else {
            return Ok(None);
        };

        let todo = ctx.data::<TodoContext>()?.todos().find_by_id(uuid).await?;
        Ok(todo.map(Todo::from))
    }
}
