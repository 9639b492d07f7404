//! Log append workflow
//!
//! One authenticated, as-idempotent-as-possible append of a batch of
//! events to a named destination:
//!
//! ```text
//! START -> AUTHENTICATED -> DESTINATION_READY -> CURSOR_KNOWN -> APPENDED
//! ```
//!
//! Every failure transition is terminal; there is no resume or retry
//! state, and nothing persists across runs.

use crate::client::{ApiFailure, IdentityApi, LogsApi};
use crate::config::SeedConfig;
use crate::error::{Error, Result};
use crate::generator::{generate_batch, SentenceSource};
use crate::protocol::{ProbeOutcome, PutEventsAck, PutEventsRequest};
use crate::types::{Destination, LogEvent, SequenceCursor};

/// Performs one append run against a log destination
pub struct LogAppender<A> {
    api: A,
}

impl<A> LogAppender<A>
where
    A: IdentityApi + LogsApi,
{
    /// Create an appender over the given backend client
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Prove the configured credentials work
    ///
    /// Any failure collapses to a generic authentication error; the
    /// distinction between expired, missing and invalid credentials is
    /// not surfaced.
    pub async fn verify_credentials(&self) -> Result<()> {
        match self.api.caller_identity().await {
            Ok(_) => Ok(()),
            Err(failure) => Err(Error::Authentication(failure.to_string())),
        }
    }

    /// Create the group and stream unless creation is suppressed
    ///
    /// Creation is idempotent: an already-exists rejection from either
    /// call is success.
    pub async fn ensure_destination(&self, destination: &Destination, create: bool) -> Result<()> {
        if !create {
            return Ok(());
        }
        match self.api.create_group(&destination.group).await {
            Ok(()) => {}
            Err(ApiFailure::Rejected(e)) if e.is_already_exists() => {}
            Err(failure) => return Err(Error::destination(failure)),
        }
        match self
            .api
            .create_stream(&destination.group, &destination.stream)
            .await
        {
            Ok(()) => {}
            Err(ApiFailure::Rejected(e)) if e.is_already_exists() => {}
            Err(failure) => return Err(Error::destination(failure)),
        }
        Ok(())
    }

    /// Learn the expected sequencing token for the next append
    ///
    /// The backend has no direct query for the token; the only way to
    /// learn it is an append that is guaranteed to be rejected, with the
    /// answer read out of the rejection payload.
    pub async fn discover_cursor(&self, destination: &Destination) -> Result<SequenceCursor> {
        let probe = PutEventsRequest::probe(destination);
        let outcome = match self.api.put_events(&probe).await {
            Ok(_) => ProbeOutcome::UnexpectedSuccess,
            Err(ApiFailure::Transport(msg)) => return Err(Error::Transport(msg)),
            Err(ApiFailure::Rejected(error)) => ProbeOutcome::classify(error),
        };
        match outcome {
            ProbeOutcome::UnexpectedSuccess => Err(Error::ProtocolInvariant),
            ProbeOutcome::CursorValue(token) => Ok(SequenceCursor::Token(token)),
            ProbeOutcome::CursorAbsent => Ok(SequenceCursor::Absent),
            ProbeOutcome::UnrecognizedError(error) => Err(Error::UnrecognizedResponse(error)),
            ProbeOutcome::OtherError(error) => Err(Error::Backend(error)),
        }
    }

    /// Append the batch with the discovered cursor attached
    ///
    /// No retry and no re-discovery on failure: a stale cursor between
    /// discovery and append aborts the run.
    pub async fn append_batch(
        &self,
        destination: &Destination,
        events: Vec<LogEvent>,
        cursor: &SequenceCursor,
    ) -> Result<PutEventsAck> {
        let request = PutEventsRequest::new(destination, events).with_cursor(cursor);
        self.api.put_events(&request).await.map_err(Error::Append)
    }

    /// Drive one full run and return the appended batch
    pub async fn run(
        &self,
        config: &SeedConfig,
        source: &dyn SentenceSource,
    ) -> Result<Vec<LogEvent>> {
        self.verify_credentials().await?;
        let events = generate_batch(config.count, source).await?;
        self.ensure_destination(&config.destination, config.create_destination)
            .await?;
        let cursor = self.discover_cursor(&config.destination).await?;
        self.append_batch(&config.destination, events.clone(), &cursor)
            .await?;
        Ok(events)
    }
}
