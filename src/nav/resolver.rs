//! Pre-navigation resolvers.
//!
//! A resolver runs after the guard admits and before the destination is
//! constructed. Navigation is held open while it is pending. Success lets
//! the navigation complete with the payload, failure turns it into a
//! redirect to the error route.

use std::sync::Arc;

use async_trait::async_trait;

use super::route::RouteId;
use crate::data::{DataSource, Payload};

/// State of one resolution.
///
/// Starts `Pending` and settles at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResolutionOutcome {
    #[default]
    Pending,
    Success(Payload),
    Failure(String),
}

impl ResolutionOutcome {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ResolutionOutcome::Pending)
    }

    /// Move a pending resolution to its terminal state.
    ///
    /// Returns `false` and leaves the outcome untouched if it had already
    /// settled.
    pub fn settle(&mut self, result: Result<Payload, String>) -> bool {
        if self.is_settled() {
            tracing::warn!(current = ?self, "Ignoring second settlement of a resolution");
            return false;
        }
        *self = match result {
            Ok(payload) => ResolutionOutcome::Success(payload),
            Err(message) => ResolutionOutcome::Failure(message),
        };
        true
    }
}

/// Pre-navigation fetch for a route.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve data for `target`. Must return a settled outcome.
    async fn resolve(&self, target: &RouteId) -> ResolutionOutcome;
}

/// Resolver that issues exactly one fetch against a [`DataSource`] per
/// call. Nothing is cached between calls.
pub struct DataResolver {
    source: Arc<dyn DataSource>,
}

impl DataResolver {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Resolver for DataResolver {
    async fn resolve(&self, target: &RouteId) -> ResolutionOutcome {
        let mut outcome = ResolutionOutcome::Pending;
        match self.source.fetch().await {
            Ok(payload) => {
                tracing::debug!(route = %target, "Resolver fetch succeeded");
                outcome.settle(Ok(payload));
            }
            Err(err) => {
                tracing::warn!(route = %target, error = %err, "Resolver fetch failed");
                outcome.settle(Err(err.to_string()));
            }
        }
        outcome
    }
}
