//! Todo repository for centralized database operations
//!
//! This module defines the [`TodoRepository`] interface the GraphQL layer
//! depends on, and its PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::error::{RepositoryError, RepositoryResult};
use super::ordering::TodoOrdering;
use super::utils::TODO_COLUMNS;
use crate::models::{NewTodo, Todo, TodoPatch};

/// Storage operations for todos
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos in the given order
    async fn find_all(&self, ordering: TodoOrdering) -> RepositoryResult<Vec<Todo>>;

    /// A single todo, or `None` if no row has this id
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Todo>>;

    /// Insert a todo and return the stored row
    async fn create(&self, new: NewTodo) -> RepositoryResult<Todo>;

    /// Apply a partial update and refresh `updated_at`
    ///
    /// Fails with [`RepositoryError::NotFound`] when no row matches.
    async fn update(&self, id: Uuid, patch: TodoPatch) -> RepositoryResult<Todo>;

    /// Delete a todo and return the removed row
    ///
    /// Fails with [`RepositoryError::NotFound`] when no row matches.
    async fn delete(&self, id: Uuid) -> RepositoryResult<Todo>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepositoryResult<()>;
}

/// PostgreSQL-backed todo repository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    /// Create a new PgTodoRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn find_all(&self, ordering: TodoOrdering) -> RepositoryResult<Vec<Todo>> {
        let sql = format!("SELECT {} FROM todos ORDER BY {}", TODO_COLUMNS, ordering);
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Todo>> {
        let sql = format!("SELECT {} FROM todos WHERE id = $1", TODO_COLUMNS);
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn create(&self, new: NewTodo) -> RepositoryResult<Todo> {
        let sql = format!(
            "INSERT INTO todos (description, completed) VALUES ($1, $2) RETURNING {}",
            TODO_COLUMNS
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(new.description)
            .bind(new.completed)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> RepositoryResult<Todo> {
        // NULL parameters keep the current column value
        let sql = format!(
            r#"UPDATE todos
            SET description = COALESCE($2, description),
                completed = COALESCE($3, completed),
                updated_at = GREATEST(NOW(), created_at)
            WHERE id = $1
            RETURNING {}"#,
            TODO_COLUMNS
        );
        sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(patch.description)
            .bind(patch.completed)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Todo> {
        let sql = format!("DELETE FROM todos WHERE id = $1 RETURNING {}", TODO_COLUMNS);
        sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
