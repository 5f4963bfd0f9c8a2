//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{TimerSnapshot, TimerStatus};

/// Uniform response envelope for every timer endpoint
///
/// Both the query-parameter and the legacy JSON-body families return this
/// shape, so clients can switch families without changing their parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerResponse {
    pub success: bool,
    pub status: TimerStatus,
    pub remaining_seconds: u64,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl TimerResponse {
    /// Create a success response from an engine snapshot
    pub fn ok(snapshot: TimerSnapshot) -> Self {
        Self {
            success: true,
            status: snapshot.status,
            remaining_seconds: snapshot.remaining_seconds,
            display: snapshot.display,
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a rejection response carrying the unchanged current state
    pub fn rejected(message: String, snapshot: TimerSnapshot) -> Self {
        Self {
            success: false,
            status: snapshot.status,
            remaining_seconds: snapshot.remaining_seconds,
            display: snapshot.display,
            message: Some(message),
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            version: "2.0.0".to_string(),
            uptime,
            timestamp: Utc::now(),
        }
    }
}
