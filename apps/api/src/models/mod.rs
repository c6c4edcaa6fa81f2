//! Database models and types for the todo API
//!
//! This module contains the SQLx row model for todos and the payloads
//! passed into the repository layer.

pub mod todo;

pub use todo::{NewTodo, Todo, TodoPatch};
