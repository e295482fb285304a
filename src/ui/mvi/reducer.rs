//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Apply `intent` to `state`. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
