//! GraphQL type definitions for the todo API

mod todo;

pub use todo::{OrderBy, SortOrder, Todo, TodoCreateInput, TodoOrderByInput, TodoUpdateInput};
