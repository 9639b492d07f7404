//! Backend client seam
//!
//! The traits here separate the protocol logic from the transport. The one
//! production implementation lives in [`http`]; tests substitute scripted
//! doubles that record their calls.

mod http;

use std::fmt;

use async_trait::async_trait;

use crate::protocol::{
    ApiError, CallerIdentity, DescribePageRequest, ParameterDetail, ParameterPage,
    PutEventsAck, PutEventsRequest,
};

pub use http::HttpApiClient;

/// Result of a single backend call
pub type ApiResult<T> = Result<T, ApiFailure>;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// The call never produced a backend response (connect, TLS, decode)
    Transport(String),
    /// The backend answered with an error envelope
    Rejected(ApiError),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiFailure::Rejected(e) => write!(f, "{} and error: {}", e.code, e.message),
        }
    }
}

impl std::error::Error for ApiFailure {}

/// Identity-check endpoint
#[async_trait]
pub trait IdentityApi {
    /// Prove the configured credentials work
    async fn caller_identity(&self) -> ApiResult<CallerIdentity>;
}

/// Log-destination management and append calls
#[async_trait]
pub trait LogsApi {
    async fn create_group(&self, group: &str) -> ApiResult<()>;
    async fn create_stream(&self, group: &str, stream: &str) -> ApiResult<()>;
    async fn put_events(&self, request: &PutEventsRequest) -> ApiResult<PutEventsAck>;
}

/// Parameter-store listing and value lookup
#[async_trait]
pub trait ParameterApi {
    async fn describe_parameters(&self, request: &DescribePageRequest) -> ApiResult<ParameterPage>;
    async fn get_parameter(&self, name: &str) -> ApiResult<ParameterDetail>;
}
