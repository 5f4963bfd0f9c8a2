//! Error types for timer operations

use thiserror::Error;

/// Errors surfaced by the timer engine
///
/// Validation happens before any mutation: an operation either accepts its
/// input and applies it atomically, or returns an error with the state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("duration must be non-negative, got {value}")]
    InvalidArgument { value: i64 },
}
