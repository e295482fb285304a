//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use navguard::data::{DataSource, FetchError, Payload};
use navguard::nav::{Route, RouteContext, RouteId, TextView};
use parking_lot::Mutex;

/// Data source with a fixed delay and a fixed result that counts its calls.
pub struct ScriptedSource {
    delay: Duration,
    result: Result<Payload, String>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn ok(delay: Duration, payload: Payload) -> Arc<Self> {
        Arc::new(Self {
            delay,
            result: Ok(payload),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(delay: Duration, message: &str) -> Arc<Self> {
        Arc::new(Self {
            delay,
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn fetch(&self) -> Result<Payload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.result.clone().map_err(FetchError::failed)
    }
}

/// Contexts handed to a route's factory, one per construction.
pub type Constructions = Arc<Mutex<Vec<RouteContext>>>;

/// Route whose factory records every construction.
pub fn recording_route(id: &str) -> (Route, Constructions) {
    let seen: Constructions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let title = id.to_string();
    let route = Route::new(id, move |ctx: &RouteContext| {
        sink.lock().push(ctx.clone());
        TextView::boxed(title.clone(), "")
    });
    (route, seen)
}

pub fn route(id: &str) -> RouteId {
    RouteId::from(id)
}
