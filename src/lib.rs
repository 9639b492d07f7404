//! Cloudtools
//!
//! Command-line utilities against a cloud provider's logging and
//! parameter-store HTTP APIs.
//!
//! # Binaries
//!
//! - **seed-logs**: generates synthetic timestamped log events, ensures
//!   the target group/stream exists, negotiates the sequencing-token
//!   protocol and appends the batch in one call
//! - **list-params**: lists configuration parameters matching a name
//!   filter, paging through all results, optionally revealing values
//!
//! # Modules
//!
//! - `types`: core data structures (LogEvent, Destination, SequenceCursor)
//! - `protocol`: wire request/response bodies and the error envelope
//! - `client`: backend trait seam plus the HTTP implementation
//! - `appender`: the append workflow and its cursor discovery
//! - `generator`: synthetic batch generation from a sentence source
//! - `listing`: filtered, paginated parameter listing
//! - `config`: immutable per-run configuration records
//! - `error`: the run-terminal error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use cloudtools::config::{ClientConfig, Credentials, SeedConfig};
//! use cloudtools::generator::HttpSentenceSource;
//! use cloudtools::types::Destination;
//! use cloudtools::{HttpApiClient, LogAppender};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HttpApiClient::new(ClientConfig::default(), Credentials::from_env());
//!     let appender = LogAppender::new(client);
//!     let config = SeedConfig::new(
//!         Destination::new("app-logs".to_string(), "host-1".to_string()),
//!         5,
//!     );
//!     let events = appender.run(&config, &HttpSentenceSource::default()).await.unwrap();
//!     println!("{}", serde_json::to_string_pretty(&events).unwrap());
//! }
//! ```

pub mod appender;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod listing;
pub mod protocol;
pub mod types;

// Re-export commonly used items at crate root
pub use appender::LogAppender;
pub use client::{ApiFailure, HttpApiClient};
pub use config::{ClientConfig, Credentials, SeedConfig, DEFAULT_REGION};
pub use error::{Error, Result};
pub use listing::{ParameterLister, SECURE_VALUE_MASK};
pub use protocol::{ApiError, ProbeOutcome};
pub use types::{
    Destination, LogEvent, NameFilter, ParameterKind, ParameterSummary, SequenceCursor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
