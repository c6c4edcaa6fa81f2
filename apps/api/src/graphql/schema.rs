//! GraphQL schema builder for the todo API
//!
//! This module provides the schema construction for the async-graphql API
//! and the entry point that runs a request with its per-request context.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Request, Response, Schema};

use crate::context::create_context;
use crate::repositories::TodoRepository;

use super::mutation::Mutation;
use super::query::Query;

/// The todo GraphQL schema type
pub type TodoSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema
pub struct SchemaBuilder {
    introspection: bool,
}

impl SchemaBuilder {
    /// Create a new schema builder with introspection enabled
    pub fn new() -> Self {
        Self {
            introspection: true,
        }
    }

    /// Enable or disable introspection queries
    ///
    /// Production servers turn this off.
    pub fn introspection(mut self, enabled: bool) -> Self {
        self.introspection = enabled;
        self
    }

    /// Build the schema
    pub fn build(self) -> TodoSchema {
        let mut builder = Schema::build(Query::default(), Mutation::default(), EmptySubscription);

        if !self.introspection {
            builder = builder.disable_introspection();
        }

        builder.finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema with default settings
pub fn build_schema() -> TodoSchema {
    SchemaBuilder::new().build()
}

/// Execute a request with a fresh [`TodoContext`](crate::context::TodoContext)
pub async fn execute(
    schema: &TodoSchema,
    todos: &Arc<dyn TodoRepository>,
    request: impl Into<Request>,
) -> Response {
    let request = request.into().data(create_context(todos));
    schema.execute(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builder_default() {
        let builder = SchemaBuilder::default();
        assert!(builder.introspection);
    }

    #[test]
    fn test_sdl_matches_wire_contract() {
        let sdl = build_schema().sdl();

        assert!(sdl.contains("allTodos("));
        assert!(sdl.contains("[Todo!]!"));
        assert!(sdl.contains("todoById(id: String): Todo"));
        assert!(sdl.contains("createTodo(data: TodoCreateInput!): Todo"));
        assert!(sdl.contains("deleteTodo(id: String!): Todo"));
        assert!(sdl.contains("enum SortOrder"));
        assert!(sdl.contains("createdAt"));
        assert!(sdl.contains("input TodoUpdateInput"));
    }

    #[tokio::test]
    async fn test_introspection_can_be_disabled() {
        let schema = SchemaBuilder::new().introspection(false).build();
        let response = schema.execute("{ __schema { queryType { name } } }").await;
        let data = response.data.into_json().unwrap();
        assert!(data.get("__schema").map_or(true, |v| v.is_null()));
    }
}
