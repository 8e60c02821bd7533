//! Application preferences stored in `config.yaml`.
//!
//! Grid contents (open URLs, columns, rows, zoom) are not preferences; they
//! live in the state store (see [`crate::state`]).
//!
//! # Sub-modules
//!
//! - [`persistence`]: `load` / `save` and XDG path helpers

mod persistence;

pub(crate) use persistence::write_atomic;

use crate::defaults;
use crate::types::{LayoutMode, LogLevel, ReloadMode, SchemePolicy};
use serde::{Deserialize, Serialize};

/// Browser grid preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme prefixed onto addresses typed without one
    pub scheme_policy: SchemePolicy,

    /// Free columns x rows grid or a fixed named layout
    pub layout_mode: LayoutMode,

    /// Behavior of the per-pane reload button
    pub reload_mode: ReloadMode,

    /// Log level for the debug log file (the `--log-level` flag overrides it)
    pub log_level: LogLevel,

    /// Viewport width used when computing slots without a window
    #[serde(default = "defaults::viewport_width")]
    pub viewport_width: f32,

    /// Viewport height used when computing slots without a window
    #[serde(default = "defaults::viewport_height")]
    pub viewport_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme_policy: SchemePolicy::default(),
            layout_mode: LayoutMode::default(),
            reload_mode: ReloadMode::default(),
            log_level: LogLevel::default(),
            viewport_width: defaults::viewport_width(),
            viewport_height: defaults::viewport_height(),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scheme policy
    pub fn with_scheme_policy(mut self, policy: SchemePolicy) -> Self {
        self.scheme_policy = policy;
        self
    }

    /// Set the layout mode
    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Set the reload mode
    pub fn with_reload_mode(mut self, mode: ReloadMode) -> Self {
        self.reload_mode = mode;
        self
    }

    /// Set the default viewport size
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamedLayout;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.scheme_policy, SchemePolicy::Https);
        assert_eq!(config.layout_mode, LayoutMode::Dynamic);
        assert_eq!(config.reload_mode, ReloadMode::Reload);
        assert_eq!(config.viewport_width, 1920.0);
        assert_eq!(config.viewport_height, 1080.0);
    }

    #[test]
    fn test_config_yaml_partial_document() {
        let yaml = "scheme_policy: http\nlayout_mode: 3x3\n";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.scheme_policy, SchemePolicy::Http);
        assert_eq!(config.layout_mode, LayoutMode::Named(NamedLayout::ThreeByThree));
        assert_eq!(config.reload_mode, ReloadMode::Reload);
        assert_eq!(config.viewport_width, 1920.0);
    }

    #[test]
    fn test_config_yaml_rejects_unknown_layout() {
        let yaml = "layout_mode: 7x7\n";
        assert!(serde_yaml_ng::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_reload_mode(ReloadMode::Resubmit)
            .with_viewport(800.0, 600.0);
        assert_eq!(config.reload_mode, ReloadMode::Resubmit);
        assert_eq!(config.viewport_width, 800.0);
    }
}
