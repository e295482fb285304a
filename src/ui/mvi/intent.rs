//! Marker trait for intents.

/// An event that may change presentation state.
///
/// Intents come from the operation a view is presenting (fetch started,
/// fetch succeeded, ...) rather than from rendering code.
pub trait Intent: Send + 'static {}
