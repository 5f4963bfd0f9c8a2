//! Timer state structure and tick semantics

use serde::{Deserialize, Serialize};

/// Run mode of the countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerStatus {
    Running,
    Paused,
}

/// Countdown timer state - remaining duration plus run mode
///
/// `remaining_seconds` never goes negative: a decrement that would cross
/// zero clamps at zero and forces `Paused`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub status: TimerStatus,
}

impl TimerState {
    /// Create a new timer state: zero seconds remaining, paused
    pub fn new() -> Self {
        Self {
            remaining_seconds: 0,
            status: TimerStatus::Paused,
        }
    }

    /// Check if the timer is currently counting down
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Format the remaining duration as `M:SS` (minutes unbounded,
    /// seconds zero-padded)
    pub fn display(&self) -> String {
        format!(
            "{}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }

    /// Apply one tick: decrement the remaining duration by a second,
    /// clamping at zero and pausing when zero is reached.
    ///
    /// No-op while paused. Returns whether a decrement was applied, so the
    /// ticking task can log without re-reading the state.
    pub fn tick_once(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.status = TimerStatus::Paused;
        }
        true
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
