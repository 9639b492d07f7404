//! Backend error envelope and probe classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rejection code for a sequencing-token mismatch
pub const INVALID_SEQUENCE_TOKEN: &str = "InvalidSequenceTokenException";

/// Rejection code for creating a resource that already exists
pub const RESOURCE_ALREADY_EXISTS: &str = "ResourceAlreadyExistsException";

/// Message fragment the backend uses for a destination with no prior data
pub const EMPTY_STREAM_SENTINEL: &str = "The next expected sequenceToken is: null";

/// Error payload returned by the backend on a rejected call
///
/// The code may arrive namespaced (`com.example#SomeException`);
/// classification always uses the trailing segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "__type", default)]
    pub code: String,
    #[serde(default, alias = "Message")]
    pub message: String,
    /// Present only on sequencing rejections against a non-empty destination
    #[serde(
        rename = "expectedSequenceToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_sequence_token: Option<String>,
}

impl ApiError {
    /// Create a new error payload
    pub fn new(code: String, message: String) -> Self {
        Self {
            code,
            message,
            expected_sequence_token: None,
        }
    }

    /// The code with any `#`-namespace prefix stripped
    pub fn short_code(&self) -> &str {
        match self.code.rsplit_once('#') {
            Some((_, short)) => short,
            None => &self.code,
        }
    }

    /// Whether this rejection means the resource already exists
    pub fn is_already_exists(&self) -> bool {
        self.short_code() == RESOURCE_ALREADY_EXISTS
    }

    /// Whether this rejection is a sequencing-token mismatch
    pub fn is_invalid_sequence_token(&self) -> bool {
        self.short_code() == INVALID_SEQUENCE_TOKEN
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Outcome of the deliberately invalid probe append
///
/// The probe is the only way to learn the expected sequencing token: the
/// backend has no direct query for it, so we issue an append that must be
/// rejected and read the answer out of the rejection payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probe was accepted, which must never happen
    UnexpectedSuccess,
    /// The rejection supplied the expected token
    CursorValue(String),
    /// The rejection says the destination is empty and takes no token
    CursorAbsent,
    /// A sequencing rejection in a shape we do not know
    UnrecognizedError(ApiError),
    /// Any rejection outside the sequencing protocol
    OtherError(ApiError),
}

impl ProbeOutcome {
    /// Classify a rejection payload from the probe append
    pub fn classify(error: ApiError) -> Self {
        if !error.is_invalid_sequence_token() {
            return ProbeOutcome::OtherError(error);
        }
        if let Some(token) = error.expected_sequence_token {
            return ProbeOutcome::CursorValue(token);
        }
        if error.message.contains(EMPTY_STREAM_SENTINEL) {
            return ProbeOutcome::CursorAbsent;
        }
        ProbeOutcome::UnrecognizedError(error)
    }
}
