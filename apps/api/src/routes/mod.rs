//! HTTP routes for the todo API
//!
//! - GraphQL endpoint and Playground
//! - Health check endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GraphQLState};
pub use health::{health_router, HealthState};

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::graphql::TodoSchema;
use crate::repositories::TodoRepository;

/// Assemble the full application router
pub fn app(schema: TodoSchema, todos: Arc<dyn TodoRepository>) -> Router {
    Router::new()
        .merge(graphql_router(GraphQLState::new(schema, Arc::clone(&todos))))
        .nest("/health", health_router(HealthState::new(todos)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
