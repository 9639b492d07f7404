//! Log event types

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single timestamped log event
///
/// Events are immutable once created. Batch order is insertion order;
/// the backend stores events in increasing timestamp order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub message: String,
}

impl LogEvent {
    /// Create a new event with an explicit timestamp
    pub fn new(timestamp: i64, message: String) -> Self {
        Self { timestamp, message }
    }

    /// Create a new event timestamped at the current instant
    pub fn now(message: String) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            message,
        }
    }
}
