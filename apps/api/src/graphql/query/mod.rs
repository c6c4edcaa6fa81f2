//! GraphQL queries for the todo API

mod todo;

pub use todo::TodoQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(TodoQuery);
