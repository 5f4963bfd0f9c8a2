//! Countdown ticking background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{debug, info};

use crate::state::AppState;

/// Background task that decrements the running timer once per second
///
/// Spawned once at startup and runs for the process lifetime. All shared
/// access goes through the engine's lock; the one-second interval is the
/// task's only suspension point. While the timer is paused the tick is a
/// no-op inside the engine.
pub async fn timer_tick_task(state: Arc<AppState>) {
    info!("Starting timer tick task");

    let mut interval = interval(Duration::from_secs(1));

    loop {
        interval.tick().await;

        if let Some(snapshot) = state.engine.tick() {
            if snapshot.remaining_seconds == 0 {
                info!("Countdown finished, timer paused");
            } else {
                debug!("Tick: {} remaining", snapshot.display);
            }
        }
    }
}
