//! Concurrency-safe timer engine
//!
//! The engine exclusively owns the single `TimerState` and serializes every
//! read and mutation - including ticks from the background task - through
//! one mutex. Each operation holds the lock for a bounded, O(1) amount of
//! work and performs no I/O, so concurrent HTTP handlers and the ticking
//! task always observe a consistent state.

use parking_lot::Mutex;

use super::{TimerError, TimerState, TimerStatus};

/// Read-only view of the timer handed across the engine boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub remaining_seconds: u64,
    pub display: String,
}

impl TimerSnapshot {
    fn of(state: &TimerState) -> Self {
        Self {
            status: state.status,
            remaining_seconds: state.remaining_seconds,
            display: state.display(),
        }
    }
}

/// Thread-safe countdown timer engine
///
/// One instance lives for the whole process; the HTTP layer and the
/// background ticking task share it behind an `Arc`.
#[derive(Debug)]
pub struct TimerEngine {
    state: Mutex<TimerState>,
}

impl TimerEngine {
    /// Create an engine with a fresh timer: zero remaining, paused
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TimerState::new()),
        }
    }

    /// Set the remaining duration to `total_seconds` and pause
    ///
    /// Never auto-starts; a follow-up `start` is required to begin
    /// counting down.
    pub fn set(&self, total_seconds: i64) -> Result<TimerSnapshot, TimerError> {
        let total = non_negative(total_seconds)?;
        let mut state = self.state.lock();
        state.remaining_seconds = total;
        state.status = TimerStatus::Paused;
        Ok(TimerSnapshot::of(&state))
    }

    /// Begin counting down
    ///
    /// Starting an empty timer is a silent no-op (stays paused), as is
    /// starting one that is already running.
    pub fn start(&self) -> TimerSnapshot {
        let mut state = self.state.lock();
        if state.remaining_seconds > 0 {
            state.status = TimerStatus::Running;
        }
        TimerSnapshot::of(&state)
    }

    /// Pause the countdown, keeping the remaining duration; idempotent
    pub fn stop(&self) -> TimerSnapshot {
        let mut state = self.state.lock();
        state.status = TimerStatus::Paused;
        TimerSnapshot::of(&state)
    }

    /// Add seconds to the remaining duration; run mode is unchanged
    pub fn add(&self, seconds: i64) -> Result<TimerSnapshot, TimerError> {
        let seconds = non_negative(seconds)?;
        let mut state = self.state.lock();
        state.remaining_seconds = state.remaining_seconds.saturating_add(seconds);
        Ok(TimerSnapshot::of(&state))
    }

    /// Remove seconds from the remaining duration, clamping at zero
    ///
    /// Hitting zero forces a pause, same as ticking down to zero.
    pub fn subtract(&self, seconds: i64) -> Result<TimerSnapshot, TimerError> {
        let seconds = non_negative(seconds)?;
        let mut state = self.state.lock();
        state.remaining_seconds = state.remaining_seconds.saturating_sub(seconds);
        if state.remaining_seconds == 0 {
            state.status = TimerStatus::Paused;
        }
        Ok(TimerSnapshot::of(&state))
    }

    /// Clear the timer back to zero seconds, paused
    pub fn reset(&self) -> TimerSnapshot {
        let mut state = self.state.lock();
        state.remaining_seconds = 0;
        state.status = TimerStatus::Paused;
        TimerSnapshot::of(&state)
    }

    /// Read the current state without mutating it
    pub fn status(&self) -> TimerSnapshot {
        TimerSnapshot::of(&self.state.lock())
    }

    /// Apply one tick from the background task
    ///
    /// Returns the resulting snapshot only when a decrement was applied,
    /// so the caller can log countdown progress without polling a paused
    /// timer.
    pub fn tick(&self) -> Option<TimerSnapshot> {
        let mut state = self.state.lock();
        state.tick_once().then(|| TimerSnapshot::of(&state))
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(value: i64) -> Result<u64, TimerError> {
    u64::try_from(value).map_err(|_| TimerError::InvalidArgument { value })
}
