//! Database repository layer for the todo API
//!
//! Resolvers talk to [`TodoRepository`] only. The PostgreSQL implementation
//! holds the SQL; the in-memory implementation mirrors its semantics for
//! tests and database-less runs.

pub mod error;
pub mod memory;
pub mod ordering;
pub mod todo;
pub mod utils;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::MemoryTodoRepository;
pub use ordering::{SortDirection, TodoOrderField, TodoOrdering};
pub use todo::{PgTodoRepository, TodoRepository};
