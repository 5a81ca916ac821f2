use crate::handlers::{
    diagnostics, get_canvas, get_snapshot, health_check, list_snapshots, paint_cell, ready_check,
};
use crate::state::AppState;
use crate::ws::live_handler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/v1/canvas", get(get_canvas))
        .route("/v1/canvas/cells/:cell_id", post(paint_cell))
        .route("/v1/snapshots", get(list_snapshots))
        .route("/v1/snapshots/:index", get(get_snapshot))
        .route("/v1/diagnostics", get(diagnostics))
        .route("/v1/live", get(live_handler))
        .with_state(state)
}
