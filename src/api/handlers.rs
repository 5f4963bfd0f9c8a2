//! HTTP endpoint handlers
//!
//! Two endpoint families map onto the same engine operations: the
//! query-parameter API under `/api/timer/` and the legacy JSON-body API
//! kept directly under `/api/`. Handlers that take no arguments are shared
//! between the families since no wire translation differs.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use super::responses::{HealthResponse, TimerResponse};
use crate::state::{AppState, TimerError, TimerSnapshot};

/// Duration arguments accepted by set/add/subtract
///
/// Deserialized from the query string by the `/api/timer/` family and from
/// a JSON body by the legacy family; both fields default to zero when
/// omitted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DurationParams {
    pub minutes: Option<i64>,
    pub seconds: Option<i64>,
}

impl DurationParams {
    /// Combine minutes and seconds into a total second count
    pub fn total_seconds(&self) -> i64 {
        self.minutes
            .unwrap_or(0)
            .saturating_mul(60)
            .saturating_add(self.seconds.unwrap_or(0))
    }
}

/// Build the response for an operation that validates its input
///
/// Negative durations come back as HTTP 400 with `success=false` and the
/// unchanged timer state in the envelope; the process never drops the
/// request.
fn fallible_response(
    action: &str,
    state: &AppState,
    result: Result<TimerSnapshot, TimerError>,
) -> Response {
    match result {
        Ok(snapshot) => {
            info!("{} -> {} ({:?})", action, snapshot.display, snapshot.status);
            Json(TimerResponse::ok(snapshot)).into_response()
        }
        Err(e) => {
            warn!("{} rejected: {}", action, e);
            let body = TimerResponse::rejected(e.to_string(), state.engine.status());
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}

/// Handle POST /api/timer/set - set the countdown duration, paused
pub async fn set_timer_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DurationParams>,
) -> Response {
    fallible_response("set", &state, state.engine.set(params.total_seconds()))
}

/// Handle POST /api/timer/add - extend the countdown
pub async fn add_timer_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DurationParams>,
) -> Response {
    fallible_response("add", &state, state.engine.add(params.total_seconds()))
}

/// Handle POST /api/timer/subtract - shorten the countdown
pub async fn subtract_timer_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DurationParams>,
) -> Response {
    fallible_response(
        "subtract",
        &state,
        state.engine.subtract(params.total_seconds()),
    )
}

/// Handle POST /api/timer/start and POST /api/start - begin counting down
pub async fn start_timer_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let snapshot = state.engine.start();
    info!("start -> {} ({:?})", snapshot.display, snapshot.status);
    Json(TimerResponse::ok(snapshot))
}

/// Handle POST /api/timer/stop and POST /api/stop - pause the countdown
pub async fn stop_timer_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let snapshot = state.engine.stop();
    info!("stop -> {} ({:?})", snapshot.display, snapshot.status);
    Json(TimerResponse::ok(snapshot))
}

/// Handle POST /api/timer/reset and POST /api/reset - clear the timer
pub async fn reset_timer_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let snapshot = state.engine.reset();
    info!("reset -> {}", snapshot.display);
    Json(TimerResponse::ok(snapshot))
}

/// Handle GET /api/timer/status and GET /api/status - read the timer
pub async fn timer_status_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    Json(TimerResponse::ok(state.engine.status()))
}

/// Handle POST /api/set - legacy JSON-body variant of set
pub async fn legacy_set_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DurationParams>,
) -> Response {
    fallible_response("set", &state, state.engine.set(body.total_seconds()))
}

/// Handle POST /api/add - legacy JSON-body variant of add
pub async fn legacy_add_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DurationParams>,
) -> Response {
    fallible_response("add", &state, state.engine.add(body.total_seconds()))
}

/// Handle POST /api/remove - legacy JSON-body variant of subtract
pub async fn legacy_remove_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DurationParams>,
) -> Response {
    fallible_response(
        "remove",
        &state,
        state.engine.subtract(body.total_seconds()),
    )
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.uptime()))
}
