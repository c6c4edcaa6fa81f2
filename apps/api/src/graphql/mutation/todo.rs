//! Todo mutations
//!
//! - createTodo: insert an incomplete todo
//! - updateTodo / todoUpdate: partial update
//! - deleteTodo: permanent removal
//!
//! Update failures are reported with a fixed "does not exist" message. Delete
//! failures carry the repository error as-is.

use async_graphql::{Context, Object, Result};

use crate::context::TodoContext;
use crate::graphql::parse_todo_id;
use crate::graphql::types::{Todo, TodoCreateInput, TodoUpdateInput};
use crate::repositories::RepositoryError;

fn missing_todo_error(id: &str) -> async_graphql::Error {
    async_graphql::Error::new(format!("Todo with ID {} does not exist in the database", id))
}

async fn apply_update(
    ctx: &Context<'_>,
    id: &str,
    data: TodoUpdateInput,
) -> Result<Option<Todo>> {
    let todos = ctx.data::<TodoContext>()?.todos();
    let uuid = parse_todo_id(id).ok_or_else(|| missing_todo_error(id))?;

    match todos.update(uuid, data.into()).await {
        Ok(todo) => {
            tracing::debug!(todo_id = %todo.id, "Updated todo");
            Ok(Some(Todo::from(todo)))
        }
        Err(e) => {
            if !e.is_not_found() {
                tracing::warn!(error = %e, todo_id = %uuid, "Todo update failed");
            }
            Err(missing_todo_error(id))
        }
    }
}

/// Todo mutations
#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    /// Create a new todo
    ///
    /// New todos always start incomplete.
    async fn create_todo(&self, ctx: &Context<'_>, data: TodoCreateInput) -> Result<Option<Todo>> {
        let todo = ctx
            .data::<TodoContext>()?
            .todos()
            .create(data.into())
            .await?;

        tracing::debug!(todo_id = %todo.id, "Created todo");
        Ok(Some(Todo::from(todo)))
    }

    /// Update an existing todo
    ///
    /// Only supplied fields change. `updatedAt` is refreshed.
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the Todo to edit")] id: String,
        #[graphql(desc = "Updated data for the Todo")] data: TodoUpdateInput,
    ) -> Result<Option<Todo>> {
        apply_update(ctx, &id, data).await
    }

    /// Alias of `updateTodo`
    async fn todo_update(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the Todo to edit")] id: String,
        #[graphql(desc = "Updated data for the Todo")] data: TodoUpdateInput,
    ) -> Result<Option<Todo>> {
        apply_update(ctx, &id, data).await
    }

    /// Delete a todo permanently
    ///
    /// Returns the removed todo. Fails when no todo has this id.
    async fn delete_todo(&self, ctx: &Context<'_>, id: String) -> Result<Option<Todo>> {
        let todos = ctx.data::<TodoContext>()?.todos();
        let uuid = parse_todo_id(&id).ok_or_else(|| RepositoryError::not_found(&id))?;

        let todo = todos.delete(uuid).await?;
        tracing::debug!(todo_id = %todo.id, "Deleted todo");

        Ok(Some(Todo::from(todo)))
    }
}
