//! GraphQL mutations for the todo API

mod todo;

pub use todo::TodoMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(TodoMutation);
