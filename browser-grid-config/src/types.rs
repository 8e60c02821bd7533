//! Configuration value types shared by the config file and the grid state.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Address handling
// ============================================================================

/// Scheme prefixed onto typed addresses that carry none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemePolicy {
    /// Prefix `https://`
    #[default]
    Https,
    /// Prefix `http://` (legacy-compatible mode)
    Http,
}

impl SchemePolicy {
    /// The prefix including the `://` separator
    pub fn prefix(self) -> &'static str {
        match self {
            SchemePolicy::Https => "https://",
            SchemePolicy::Http => "http://",
        }
    }
}

/// What the per-pane reload button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReloadMode {
    /// Re-issue the pane's current URL verbatim
    #[default]
    Reload,
    /// Blank the pane, then submit the address bar text again
    Resubmit,
}

// ============================================================================
// Layout
// ============================================================================

/// Fixed grid shapes selectable instead of free column/row steppers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedLayout {
    TwoByOne,
    TwoByTwo,
    ThreeByTwo,
    ThreeByThree,
    FourByTwo,
    FourByThree,
}

impl NamedLayout {
    /// Column count of this layout
    pub fn columns(self) -> u32 {
        match self {
            NamedLayout::TwoByOne | NamedLayout::TwoByTwo => 2,
            NamedLayout::ThreeByTwo | NamedLayout::ThreeByThree => 3,
            NamedLayout::FourByTwo | NamedLayout::FourByThree => 4,
        }
    }

    /// Row count of this layout
    pub fn rows(self) -> u32 {
        match self {
            NamedLayout::TwoByOne => 1,
            NamedLayout::TwoByTwo | NamedLayout::ThreeByTwo | NamedLayout::FourByTwo => 2,
            NamedLayout::ThreeByThree | NamedLayout::FourByThree => 3,
        }
    }

    /// Number of panes the layout shows without extra rows
    pub fn capacity(self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Short label used in config files and on the command line (e.g. `3x2`)
    pub fn label(self) -> &'static str {
        match self {
            NamedLayout::TwoByOne => "2x1",
            NamedLayout::TwoByTwo => "2x2",
            NamedLayout::ThreeByTwo => "3x2",
            NamedLayout::ThreeByThree => "3x3",
            NamedLayout::FourByTwo => "4x2",
            NamedLayout::FourByThree => "4x3",
        }
    }

    /// All available layouts for UI iteration
    pub fn all() -> &'static [NamedLayout] {
        &[
            NamedLayout::TwoByOne,
            NamedLayout::TwoByTwo,
            NamedLayout::ThreeByTwo,
            NamedLayout::ThreeByThree,
            NamedLayout::FourByTwo,
            NamedLayout::FourByThree,
        ]
    }
}

/// How the grid derives its shape
///
/// Serialized as a plain string: `dynamic` or one of the named labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LayoutMode {
    /// One slot per pane, columns and rows taken from the steppers
    #[default]
    Dynamic,
    /// Columns and rows fixed by a named layout
    Named(NamedLayout),
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Dynamic => f.write_str("dynamic"),
            LayoutMode::Named(layout) => f.write_str(layout.label()),
        }
    }
}

impl FromStr for LayoutMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("dynamic") {
            return Ok(LayoutMode::Dynamic);
        }
        let normalized = s.to_ascii_lowercase().replace('×', "x");
        NamedLayout::all()
            .iter()
            .find(|layout| layout.label() == normalized)
            .map(|layout| LayoutMode::Named(*layout))
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "unknown layout mode '{s}' (expected dynamic, 2x1, 2x2, 3x2, 3x3, 4x2 or 4x3)"
                ))
            })
    }
}

impl TryFrom<String> for LayoutMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LayoutMode> for String {
    fn from(mode: LayoutMode) -> Self {
        mode.to_string()
    }
}

// ============================================================================
// Zoom
// ============================================================================

/// Page zoom shared by every pane, in percent
///
/// Always within [`ZoomPercent::MIN`]..=[`ZoomPercent::MAX`] and a multiple
/// of [`ZoomPercent::STEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomPercent(u8);

impl ZoomPercent {
    pub const MIN: u8 = 50;
    pub const MAX: u8 = 100;
    pub const STEP: u8 = 5;
    pub const DEFAULT: ZoomPercent = ZoomPercent(70);

    /// Clamp to the valid range and snap to the nearest step
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        let step = i64::from(Self::STEP);
        let snapped = (clamped + step / 2) / step * step;
        Self(snapped as u8)
    }

    /// Whether `value` is already a valid zoom percentage
    pub fn is_valid(value: i64) -> bool {
        (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value)
            && value % i64::from(Self::STEP) == 0
    }

    /// The percentage value
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zoom as a scale factor for the rendering engine (70% -> 0.7)
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ZoomPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} %", self.0)
    }
}

// ============================================================================
// Chrome state
// ============================================================================

/// Whether the "opened windows" side menu is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SideMenuVisibility {
    Expanded,
    #[default]
    Collapsed,
}

impl SideMenuVisibility {
    /// Stored string form
    pub fn as_str(self) -> &'static str {
        match self {
            SideMenuVisibility::Expanded => "expanded",
            SideMenuVisibility::Collapsed => "collapsed",
        }
    }

    /// Parse the stored string form, `None` for anything unknown
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "expanded" => Some(SideMenuVisibility::Expanded),
            "collapsed" => Some(SideMenuVisibility::Collapsed),
            _ => None,
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Log level for the debug log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_and_snaps() {
        assert_eq!(ZoomPercent::clamped(10).get(), 50);
        assert_eq!(ZoomPercent::clamped(250).get(), 100);
        assert_eq!(ZoomPercent::clamped(87).get(), 85);
        assert_eq!(ZoomPercent::clamped(88).get(), 90);
        assert_eq!(ZoomPercent::clamped(70).get(), 70);
    }

    #[test]
    fn test_zoom_validity() {
        assert!(ZoomPercent::is_valid(50));
        assert!(ZoomPercent::is_valid(100));
        assert!(!ZoomPercent::is_valid(45));
        assert!(!ZoomPercent::is_valid(72));
    }

    #[test]
    fn test_zoom_factor() {
        assert!((ZoomPercent::clamped(85).factor() - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_layout_mode_parse() {
        assert_eq!("dynamic".parse::<LayoutMode>().unwrap(), LayoutMode::Dynamic);
        assert_eq!(
            "3x2".parse::<LayoutMode>().unwrap(),
            LayoutMode::Named(NamedLayout::ThreeByTwo)
        );
        assert_eq!(
            "4X3".parse::<LayoutMode>().unwrap(),
            LayoutMode::Named(NamedLayout::FourByThree)
        );
        assert!("5x5".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn test_layout_mode_round_trips_through_label() {
        for layout in NamedLayout::all() {
            let mode = LayoutMode::Named(*layout);
            assert_eq!(mode.to_string().parse::<LayoutMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_named_layout_dimensions() {
        assert_eq!(NamedLayout::TwoByOne.capacity(), 2);
        assert_eq!(NamedLayout::ThreeByThree.capacity(), 9);
        assert_eq!(NamedLayout::FourByThree.columns(), 4);
        assert_eq!(NamedLayout::FourByThree.rows(), 3);
    }

    #[test]
    fn test_side_menu_visibility_stored_form() {
        assert_eq!(
            SideMenuVisibility::from_stored("expanded"),
            Some(SideMenuVisibility::Expanded)
        );
        assert_eq!(SideMenuVisibility::from_stored("detailOnly"), None);
        assert_eq!(SideMenuVisibility::Collapsed.as_str(), "collapsed");
    }
}
