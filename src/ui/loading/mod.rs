//! Loading/error projection for component-local fetches.
//!
//! - `state.rs` - `LoadingView` and its derived phase
//! - `intent.rs` - Fetch lifecycle events
//! - `reducer.rs` - State transitions
//! - `projection.rs` - Drives a fetch through the reducer

mod intent;
mod projection;
mod reducer;
mod state;

pub use intent::LoadingIntent;
pub use projection::Projection;
pub use reducer::LoadingReducer;
pub use state::{LoadingPhase, LoadingView};
