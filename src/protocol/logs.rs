//! Request and response bodies for the log-destination service

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::{Destination, LogEvent, SequenceCursor};

/// Message body of the deliberately invalid probe append
pub const PROBE_MESSAGE: &str = "fake data";

/// Create a log group
#[derive(Debug, Clone, Serialize)]
pub struct CreateGroupRequest {
    #[serde(rename = "logGroupName")]
    pub group: String,
}

/// Create a log stream within a group
#[derive(Debug, Clone, Serialize)]
pub struct CreateStreamRequest {
    #[serde(rename = "logGroupName")]
    pub group: String,
    #[serde(rename = "logStreamName")]
    pub stream: String,
}

/// Append a batch of events to a stream
///
/// The token field is serialized only when present: an empty destination
/// rejects any token, so the field must be omitted entirely.
#[derive(Debug, Clone, Serialize)]
pub struct PutEventsRequest {
    #[serde(rename = "logGroupName")]
    pub group: String,
    #[serde(rename = "logStreamName")]
    pub stream: String,
    #[serde(rename = "logEvents")]
    pub events: Vec<LogEvent>,
    #[serde(rename = "sequenceToken", skip_serializing_if = "Option::is_none")]
    pub sequence_token: Option<String>,
}

impl PutEventsRequest {
    /// Create an append request without a token
    pub fn new(destination: &Destination, events: Vec<LogEvent>) -> Self {
        Self {
            group: destination.group.clone(),
            stream: destination.stream.clone(),
            events,
            sequence_token: None,
        }
    }

    /// Attach the discovered cursor; `Absent` leaves the field out
    pub fn with_cursor(mut self, cursor: &SequenceCursor) -> Self {
        self.sequence_token = cursor.token().map(str::to_string);
        self
    }

    /// Build the probe: one placeholder event with a syntactically valid
    /// but wrong token, guaranteed to be rejected
    pub fn probe(destination: &Destination) -> Self {
        Self {
            group: destination.group.clone(),
            stream: destination.stream.clone(),
            events: vec![LogEvent::now(PROBE_MESSAGE.to_string())],
            sequence_token: Some(Utc::now().timestamp_millis().to_string()),
        }
    }
}

/// Successful append acknowledgement
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PutEventsAck {
    /// Fresh token to use on the next append to the same stream
    #[serde(rename = "nextSequenceToken", default)]
    pub next_sequence_token: Option<String>,
}
