//! Configuration system for browser-grid.
//!
//! This crate provides:
//!
//! - Application preferences (`config.yaml`) with defaults and atomic save
//! - The key/value state store the grid persists through
//! - A typed view of the persisted grid entries
//! - Shared value types (layout mode, zoom, scheme policy)

pub mod config;
pub mod defaults;
pub mod error;
pub mod grid_state;
pub mod state;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use grid_state::{
    COLUMNS_COUNT_KEY, GridState, MAX_GRID_DIMENSION, ROWS_COUNT_KEY, SIDE_MENU_VISIBILITY_KEY,
    URLS_KEY, ZOOM_KEY, clamp_dimension,
};
pub use state::{MemoryStateStore, StateStore, StoredValue, YamlStateStore};
pub use types::{
    LayoutMode, LogLevel, NamedLayout, ReloadMode, SchemePolicy, SideMenuVisibility, ZoomPercent,
};
