//! Todo GraphQL API library
//!
//! Exposes the schema, repositories and server wiring so the binaries and
//! the integration tests share one implementation.

pub mod config;
pub mod context;
pub mod database;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;

// Re-export commonly used types
pub use context::{create_context, TodoContext};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use graphql::{build_schema, TodoSchema};
pub use repositories::{MemoryTodoRepository, PgTodoRepository, TodoRepository};
