//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod ticker;

// Re-export main functions
pub use ticker::timer_tick_task;
