//! Marker trait for presentation state.

/// Presentation state owned by a single component.
///
/// Replaced wholesale on every transition, so it must be `Clone`, and
/// `Default` provides the idle starting point.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
