//! Configuration loading.
//!
//! - `types.rs` - Serde config structs and their defaults
//! - `loader.rs` - File lookup, parsing and validation

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DataConfig, DenyAction, GuardConfig, RoutesConfig};
