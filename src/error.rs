//! Error taxonomy for the cloudtools utilities
//!
//! Every error is terminal for the run: nothing is retried or recovered
//! locally. The binaries report the backend-provided code and message
//! where available and exit non-zero.

use std::fmt;

use crate::client::ApiFailure;
use crate::protocol::ApiError;

/// Result type for cloudtools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The identity check failed; the credentials are unusable
    Authentication(String),
    /// The sentence source failed; there is no batch to append
    Content(String),
    /// Destination creation failed with something other than already-exists
    Destination(ApiError),
    /// The probe append was accepted, which must never happen
    ProtocolInvariant,
    /// A sequencing rejection arrived in an unfamiliar shape
    UnrecognizedResponse(ApiError),
    /// The backend rejected a call outside the sequencing protocol
    Backend(ApiError),
    /// The final append was rejected or did not complete
    Append(ApiFailure),
    /// Transport-level failure before any backend response arrived
    Transport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "authentication failed: {msg}"),
            Error::Content(msg) => write!(f, "content source failed: {msg}"),
            Error::Destination(e) => {
                write!(f, "destination creation failed with {} and error: {}", e.code, e.message)
            }
            Error::ProtocolInvariant => {
                write!(f, "probe append was unexpectedly accepted; aborting")
            }
            Error::UnrecognizedResponse(e) => {
                write!(f, "unrecognized sequencing rejection: {}", e.message)
            }
            Error::Backend(e) => {
                write!(f, "the backend call failed with {} and error: {}", e.code, e.message)
            }
            Error::Append(failure) => write!(f, "append failed: {failure}"),
            Error::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Map a single-call failure onto the destination-creation taxonomy
    pub(crate) fn destination(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Transport(msg) => Error::Transport(msg),
            ApiFailure::Rejected(e) => Error::Destination(e),
        }
    }

    /// Map a single-call failure onto the generic backend taxonomy
    pub(crate) fn backend(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Transport(msg) => Error::Transport(msg),
            ApiFailure::Rejected(e) => Error::Backend(e),
        }
    }
}
