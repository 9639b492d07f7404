//! Wire protocol types for the backend services
//!
//! JSON bodies POSTed with an operation-target header. The logs service
//! uses camelCase field names, the parameter service PascalCase; both
//! report failures through the same error envelope.

mod envelope;
mod identity;
mod logs;
mod params;

pub use envelope::{
    ApiError, ProbeOutcome, EMPTY_STREAM_SENTINEL, INVALID_SEQUENCE_TOKEN,
    RESOURCE_ALREADY_EXISTS,
};
pub use identity::CallerIdentity;
pub use logs::{
    CreateGroupRequest, CreateStreamRequest, PutEventsAck, PutEventsRequest, PROBE_MESSAGE,
};
pub use params::{
    DescribePageRequest, GetParameterRequest, GetParameterResponse, ParameterDetail,
    ParameterFilter, ParameterPage, PAGE_SIZE,
};
