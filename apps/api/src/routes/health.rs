//! Health check HTTP route handlers
//!
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/live` - Liveness probe with the running version
//! - `GET /health/ready` - Readiness check (verifies the datastore answers)

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

use crate::error::ApiResult;
use crate::repositories::TodoRepository;

/// Shared state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Repository whose backing store must be reachable for readiness
    pub todos: Arc<dyn TodoRepository>,
}

impl HealthState {
    /// Create new health state
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe
///
/// Does not touch the database; that is what readiness is for.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe - 503 with an error body when the datastore is unreachable
async fn readiness_probe(State(state): State<HealthState>) -> ApiResult<impl IntoResponse> {
    state.todos.ping().await?;

    Ok(Json(serde_json::json!({ "status": "ready" })))
}
