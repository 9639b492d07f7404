//! Synthetic batch generation
//!
//! Builds the batch of events to append. Message text comes from a
//! sentence source; each event is timestamped the moment it is created,
//! so a batch is naturally in increasing timestamp order.

use async_trait::async_trait;

use crate::config::DEFAULT_CONTENT_ENDPOINT;
use crate::error::{Error, Result};
use crate::types::LogEvent;

/// Source of one sentence of filler text per call
#[async_trait]
pub trait SentenceSource: Send + Sync {
    async fn sentence(&self) -> Result<String>;
}

/// Sentence source backed by a public generator endpoint
///
/// The endpoint returns a one-element JSON array containing the sentence.
pub struct HttpSentenceSource {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSentenceSource {
    /// Create a source for the given endpoint
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl Default for HttpSentenceSource {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_ENDPOINT.to_string())
    }
}

#[async_trait]
impl SentenceSource for HttpSentenceSource {
    async fn sentence(&self) -> Result<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::Content(e.to_string()))?;
        let sentences: Vec<String> = response
            .json()
            .await
            .map_err(|e| Error::Content(e.to_string()))?;
        sentences
            .into_iter()
            .next()
            .ok_or_else(|| Error::Content("empty response from sentence endpoint".to_string()))
    }
}

/// Generate `count` timestamped events from the source
pub async fn generate_batch(count: usize, source: &dyn SentenceSource) -> Result<Vec<LogEvent>> {
    let mut events = Vec::with_capacity(count);
    for _ in 0..count {
        let message = source.sentence().await?;
        events.push(LogEvent::now(message));
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct FixedSource(String);

    #[async_trait]
    impl SentenceSource for FixedSource {
        async fn sentence(&self) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SentenceSource for FailingSource {
        async fn sentence(&self) -> Result<String> {
            Err(Error::Content("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_batch_has_exactly_count_events() {
        let source = FixedSource("lorem".to_string());
        for count in [0usize, 1, 5] {
            let batch = generate_batch(count, &source).await.unwrap();
            assert_eq!(batch.len(), count);
        }
    }

    #[tokio::test]
    async fn test_batch_timestamps_bounded_by_run() {
        let source = FixedSource("lorem".to_string());
        let start = Utc::now().timestamp_millis();
        let batch = generate_batch(3, &source).await.unwrap();
        let end = Utc::now().timestamp_millis();
        for event in &batch {
            assert!(event.timestamp >= start);
            assert!(event.timestamp <= end);
            assert_eq!(event.message, "lorem");
        }
    }

    #[tokio::test]
    async fn test_source_failure_aborts_generation() {
        let result = generate_batch(2, &FailingSource).await;
        assert!(matches!(result, Err(Error::Content(_))));
    }
}
