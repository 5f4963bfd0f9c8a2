//! End-to-end tests driving the HTTP router

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use countdown_timer::{api::create_router, state::AppState, tasks::timer_tick_task};

fn test_app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(5000, "127.0.0.1".to_string()));
    let app = create_router(Arc::clone(&state));
    (state, app)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn query_api_full_flow() {
    let (_, app) = test_app();

    let (code, r) = send(&app, "POST", "/api/timer/set?minutes=2&seconds=30", None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(r["success"], true);
    assert_eq!(r["remainingSeconds"], 150);
    assert_eq!(r["display"], "2:30");
    assert_eq!(r["status"], "PAUSED");

    let (_, r) = send(&app, "GET", "/api/timer/status", None).await;
    assert_eq!(r["status"], "PAUSED");

    let (_, r) = send(&app, "POST", "/api/timer/start", None).await;
    assert_eq!(r["status"], "RUNNING");
    assert_eq!(r["remainingSeconds"], 150);

    let (_, r) = send(&app, "POST", "/api/timer/stop", None).await;
    assert_eq!(r["status"], "PAUSED");

    let (_, r) = send(&app, "POST", "/api/timer/add?seconds=10", None).await;
    assert_eq!(r["remainingSeconds"], 160);

    let (_, r) = send(&app, "POST", "/api/timer/subtract?seconds=5", None).await;
    assert_eq!(r["remainingSeconds"], 155);

    let (_, r) = send(&app, "POST", "/api/timer/reset", None).await;
    assert_eq!(r["remainingSeconds"], 0);
    assert_eq!(r["display"], "0:00");
    assert_eq!(r["status"], "PAUSED");
}

#[tokio::test]
async fn legacy_api_matches_query_api() {
    let (_, query_app) = test_app();
    let (_, legacy_app) = test_app();

    let (_, via_query) = send(&query_app, "POST", "/api/timer/set?minutes=2&seconds=30", None).await;
    let (_, via_body) = send(
        &legacy_app,
        "POST",
        "/api/set",
        Some(json!({"minutes": 2, "seconds": 30})),
    )
    .await;

    assert_eq!(via_query["remainingSeconds"], via_body["remainingSeconds"]);
    assert_eq!(via_query["display"], via_body["display"]);
    assert_eq!(via_query["status"], via_body["status"]);
}

#[tokio::test]
async fn legacy_api_full_flow() {
    let (_, app) = test_app();

    let (code, r) = send(&app, "POST", "/api/set", Some(json!({"minutes": 5}))).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(r["success"], true);
    assert_eq!(r["remainingSeconds"], 300);
    assert_eq!(r["display"], "5:00");

    let (_, r) = send(&app, "POST", "/api/add", Some(json!({"seconds": 60}))).await;
    assert_eq!(r["remainingSeconds"], 360);

    let (_, r) = send(&app, "POST", "/api/remove", Some(json!({"seconds": 30}))).await;
    assert_eq!(r["remainingSeconds"], 330);

    let (_, r) = send(&app, "POST", "/api/start", None).await;
    assert_eq!(r["status"], "RUNNING");

    let (_, r) = send(&app, "GET", "/api/status", None).await;
    assert_eq!(r["success"], true);
    assert_eq!(r["status"], "RUNNING");

    let (_, r) = send(&app, "POST", "/api/stop", None).await;
    assert_eq!(r["status"], "PAUSED");

    let (_, r) = send(&app, "POST", "/api/reset", None).await;
    assert_eq!(r["remainingSeconds"], 0);
}

#[tokio::test]
async fn negative_durations_are_rejected() {
    let (_, app) = test_app();

    send(&app, "POST", "/api/timer/set?seconds=42", None).await;

    for uri in [
        "/api/timer/set?seconds=-1",
        "/api/timer/add?seconds=-1",
        "/api/timer/subtract?seconds=-1",
        "/api/timer/set?minutes=-1",
    ] {
        let (code, r) = send(&app, "POST", uri, None).await;
        assert_eq!(code, StatusCode::BAD_REQUEST, "no rejection for {uri}");
        assert_eq!(r["success"], false);
        assert!(r["message"].as_str().unwrap().contains("non-negative"));
        // The envelope still reports the unchanged state.
        assert_eq!(r["remainingSeconds"], 42);
    }

    let (_, r) = send(
        &app,
        "POST",
        "/api/remove",
        Some(json!({"seconds": -1})),
    )
    .await;
    assert_eq!(r["success"], false);

    let (_, r) = send(&app, "GET", "/api/timer/status", None).await;
    assert_eq!(r["remainingSeconds"], 42);
    assert_eq!(r["status"], "PAUSED");
}

#[tokio::test]
async fn starting_an_empty_timer_stays_paused() {
    let (_, app) = test_app();

    let (code, r) = send(&app, "POST", "/api/timer/start", None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(r["status"], "PAUSED");
    assert_eq!(r["remainingSeconds"], 0);
}

#[tokio::test]
async fn health_reports_ok() {
    let (_, app) = test_app();

    let (code, r) = send(&app, "GET", "/health", None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(r["status"], "ok");
    assert_eq!(r["version"], "2.0.0");
}

#[tokio::test]
async fn background_tick_counts_a_running_timer_down() {
    let (state, app) = test_app();
    tokio::spawn(timer_tick_task(Arc::clone(&state)));

    send(&app, "POST", "/api/timer/set?minutes=2&seconds=30", None).await;
    send(&app, "POST", "/api/timer/start", None).await;

    tokio::time::sleep(Duration::from_millis(2500)).await;

    let (_, r) = send(&app, "GET", "/api/timer/status", None).await;
    let remaining = r["remainingSeconds"].as_u64().unwrap();
    assert!(remaining < 150, "timer did not tick: {remaining}");
    assert!(remaining >= 147, "timer ticked too fast: {remaining}");
    assert_eq!(r["status"], "RUNNING");

    let (_, r) = send(&app, "POST", "/api/timer/stop", None).await;
    assert_eq!(r["status"], "PAUSED");
    let stopped_at = r["remainingSeconds"].as_u64().unwrap();

    // A paused timer is not ticked.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let (_, r) = send(&app, "GET", "/api/timer/status", None).await;
    assert_eq!(r["remainingSeconds"].as_u64().unwrap(), stopped_at);
}
