//! Main application state management

use std::time::Instant;

use super::TimerEngine;

/// Application state shared by the HTTP layer and background tasks
///
/// Holds the single timer engine for the process plus server metadata.
/// Injected into the router via `Router::with_state` rather than living in
/// a global.
#[derive(Debug)]
pub struct AppState {
    /// The one countdown timer this process manages
    pub engine: TimerEngine,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState with a fresh, paused timer
    pub fn new(port: u16, host: String) -> Self {
        Self {
            engine: TimerEngine::new(),
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_state_has_empty_timer() {
        let state = AppState::new(5000, "127.0.0.1".to_string());
        let snapshot = state.engine.status();
        assert_eq!(snapshot.remaining_seconds, 0);
        assert_eq!(snapshot.display, "0:00");
    }

    #[test]
    fn uptime_formats_seconds() {
        let state = AppState::new(5000, "127.0.0.1".to_string());
        let uptime = state.uptime();
        assert!(uptime.ends_with('s'), "unexpected uptime format: {uptime}");
    }
}
