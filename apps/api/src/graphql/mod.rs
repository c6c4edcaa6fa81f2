//! GraphQL schema and resolvers for the todo API
//!
//! - Query resolvers: `allTodos`, `todoById`
//! - Mutation resolvers: `createTodo`, `updateTodo` (alias `todoUpdate`), `deleteTodo`
//! - Type definitions for the `Todo` object, ordering enums and inputs

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, execute, SchemaBuilder, TodoSchema};

use uuid::Uuid;

/// Parse a todo id argument exactly as given, `None` when it is not a valid identifier
pub(crate) fn parse_todo_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}
