//! GraphQL-over-HTTP endpoints
//!
//! `POST` executes an operation, `GET` serves the GraphQL Playground. Both
//! are mounted at `/` and at `/graphql`.

use std::sync::Arc;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html, routing::get, Router};

use crate::graphql::{execute, TodoSchema};
use crate::repositories::TodoRepository;

/// State shared by the GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: TodoSchema,
    pub todos: Arc<dyn TodoRepository>,
}

impl GraphQLState {
    pub fn new(schema: TodoSchema, todos: Arc<dyn TodoRepository>) -> Self {
        Self { schema, todos }
    }
}

/// Create the GraphQL router
pub fn graphql_router(state: GraphQLState) -> Router {
    Router::new()
        .route("/", get(graphql_playground).post(graphql_handler))
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .with_state(state)
}

/// Execute a GraphQL operation with a fresh per-request context
async fn graphql_handler(State(state): State<GraphQLState>, req: GraphQLRequest) -> GraphQLResponse {
    execute(&state.schema, &state.todos, req.into_inner())
        .await
        .into()
}

/// GraphQL Playground
async fn graphql_playground() -> Html<String> {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}
