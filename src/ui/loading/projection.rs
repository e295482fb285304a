//! Runs a fetch and projects its lifecycle onto a [`LoadingView`].
//!
//! Unlike a route resolver, a projection never holds navigation open: the
//! view is already on screen and shows the loading affordance itself.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::mvi::Reducer;

use super::intent::LoadingIntent;
use super::reducer::LoadingReducer;
use super::state::LoadingView;

/// Shared handle to one component's loading state.
///
/// Cloning gives the view layer a second handle to the *same* state so it
/// can poll it; the state is never shared between components.
pub struct Projection<T> {
    state: Arc<Mutex<LoadingView<T>>>,
}

impl<T> Clone for Projection<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> Projection<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(LoadingView::default())),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> LoadingView<T> {
        self.state.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading
    }

    pub fn error_text(&self) -> String {
        self.state.lock().error_text.clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.lock().data.clone()
    }

    /// Apply one lifecycle event.
    pub fn dispatch(&self, intent: LoadingIntent<T>) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = LoadingReducer::<T>::reduce(current, intent);
    }

    /// Run `fetch` and mirror its lifecycle.
    ///
    /// `Settled` is dispatched from a drop guard, so the loading flag is
    /// cleared even if this future is dropped before `fetch` completes.
    /// Returns `true` when the fetch succeeded.
    pub async fn run<F, Fut, E>(&self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.dispatch(LoadingIntent::Start);
        let settle = scopeguard::guard(self.clone(), |projection| {
            projection.dispatch(LoadingIntent::Settled);
        });

        match fetch().await {
            Ok(data) => {
                settle.dispatch(LoadingIntent::Succeeded(data));
                true
            }
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(error = %message, "Projected fetch failed");
                settle.dispatch(LoadingIntent::Failed { message });
                false
            }
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> Default for Projection<T> {
    fn default() -> Self {
        Self::new()
    }
}
