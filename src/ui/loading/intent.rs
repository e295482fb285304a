//! Lifecycle events of a fetch.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingIntent<T> {
    /// Fetch started (first attempt or retry).
    Start,

    /// Fetch produced a value.
    Succeeded(T),

    /// Fetch failed.
    Failed {
        /// User-facing message.
        message: String,
    },

    /// Fetch is over, however it ended. Runs on every exit path.
    Settled,
}

impl<T: Send + 'static> Intent for LoadingIntent<T> {}
