//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Query-parameter API
        .route("/api/timer/set", post(set_timer_handler))
        .route("/api/timer/start", post(start_timer_handler))
        .route("/api/timer/stop", post(stop_timer_handler))
        .route("/api/timer/add", post(add_timer_handler))
        .route("/api/timer/subtract", post(subtract_timer_handler))
        .route("/api/timer/reset", post(reset_timer_handler))
        .route("/api/timer/status", get(timer_status_handler))
        // Legacy JSON-body API, kept for backward compatibility
        .route("/api/set", post(legacy_set_handler))
        .route("/api/start", post(start_timer_handler))
        .route("/api/stop", post(stop_timer_handler))
        .route("/api/add", post(legacy_add_handler))
        .route("/api/remove", post(legacy_remove_handler))
        .route("/api/reset", post(reset_timer_handler))
        .route("/api/status", get(timer_status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
