//! Configuration and persisted grid state.
//!
//! Re-exports all configuration types from the `browser-grid-config` crate.

pub use browser_grid_config::*;
