//! Model-View-Intent primitives.
//!
//! Presentation state in this crate flows one way:
//!
//! ```text
//! async lifecycle event ──→ Intent ──→ Reducer ──→ State ──→ view polls
//! ```
//!
//! - **State**: plain value the view reads (`is_loading`, `error_text`, ...)
//! - **Intent**: a lifecycle event of the operation driving the view
//! - **Reducer**: the only place transitions happen

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
