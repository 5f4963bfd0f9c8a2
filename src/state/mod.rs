//! State management module
//!
//! This module contains the timer data model, the concurrency-safe engine
//! that owns it, and the shared application state.

pub mod app_state;
pub mod engine;
pub mod error;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use engine::{TimerEngine, TimerSnapshot};
pub use error::TimerError;
pub use timer_state::{TimerState, TimerStatus};
