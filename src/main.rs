//! Countdown Timer - A state-managed HTTP server around a single countdown
//!
//! This is the main entry point for the countdown-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_timer::{
    api::create_router, config::Config, state::AppState, tasks::timer_tick_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "countdown_timer={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting countdown-timer server v2.0.0");
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state with a fresh, paused timer
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the one-second ticking background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        timer_tick_task(ticker_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /api/timer/set?minutes=M&seconds=S - Set the countdown");
    info!("  POST /api/timer/start                   - Start counting down");
    info!("  POST /api/timer/stop                    - Pause the countdown");
    info!("  POST /api/timer/add?seconds=S           - Extend the countdown");
    info!("  POST /api/timer/subtract?seconds=S      - Shorten the countdown");
    info!("  POST /api/timer/reset                   - Clear the timer");
    info!("  GET  /api/timer/status                  - Read the timer");
    info!("  POST /api/{{set,start,stop,add,remove,reset}} and GET /api/status - Legacy JSON API");
    info!("  GET  /health                            - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
