//! Typed error types for the pane grid.
//!
//! None of these are fatal. A caller can ignore them, report them to the
//! user, or match on the variant.

use thiserror::Error;

/// Error returned by grid commands
#[derive(Debug, Error)]
pub enum GridError {
    /// A per-pane command named an index past the end of the collection.
    #[error("pane index {index} out of range (grid has {len} panes)")]
    PaneIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of panes at the time of the call.
        len: usize,
    },

    /// No pane holds the given URL.
    #[error("no pane shows '{0}'")]
    UrlNotFound(String),

    /// A grid dimension outside 1..=max.
    #[error("{name} must be between 1 and {max}, got {value}")]
    DimensionOutOfRange {
        name: &'static str,
        value: i64,
        max: u32,
    },

    /// Loading or saving the persisted grid failed.
    #[error(transparent)]
    State(#[from] crate::config::ConfigError),
}

/// Convenience alias
pub type GridResult<T> = Result<T, GridError>;
