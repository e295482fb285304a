//! Asynchronous data sources consumed by resolvers and loading projections.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::DataConfig;

/// Data handed from a fetch to whoever consumes it.
pub type Payload = Value;

/// Errors produced by a [`DataSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source reported a failure. The message is user-facing.
    #[error("{message}")]
    Failed { message: String },
}

impl FetchError {
    pub fn failed(message: impl Into<String>) -> Self {
        FetchError::Failed {
            message: message.into(),
        }
    }
}

/// Something that produces a payload asynchronously.
///
/// A fetch always settles eventually; there is no cancellation or timeout.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<Payload, FetchError>;
}

/// What the demo service does once its delay elapses.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoOutcome {
    Fail(String),
    Succeed(Payload),
}

/// Timer-backed stand-in for a remote service.
#[derive(Debug, Clone)]
pub struct DemoDataService {
    delay: Duration,
    outcome: DemoOutcome,
}

impl DemoDataService {
    pub fn new(delay: Duration, outcome: DemoOutcome) -> Self {
        Self { delay, outcome }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        let outcome = if config.fail {
            DemoOutcome::Fail(config.error_message.clone())
        } else {
            DemoOutcome::Succeed(Value::String(config.payload.clone()))
        };
        Self::new(Duration::from_millis(config.delay_ms), outcome)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl DataSource for DemoDataService {
    async fn fetch(&self) -> Result<Payload, FetchError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Demo fetch started");
        tokio::time::sleep(self.delay).await;
        match &self.outcome {
            DemoOutcome::Fail(message) => Err(FetchError::failed(message.clone())),
            DemoOutcome::Succeed(payload) => Ok(payload.clone()),
        }
    }
}

/// Render a payload as display text: bare strings without quotes, anything
/// else as compact JSON.
pub fn payload_text(payload: &Payload) -> String {
    match payload {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
