//! Presentation-side state: MVI primitives, loading projections and the
//! two-way binding adapter.

pub mod binding;
pub mod loading;
pub mod mvi;
