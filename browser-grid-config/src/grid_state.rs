//! Typed view over the persisted grid entries.

use crate::state::StateStore;
use crate::types::{SideMenuVisibility, ZoomPercent};
use crate::defaults;

/// Store key for the ordered pane URLs
pub const URLS_KEY: &str = "urls";
/// Store key for the grid column count
pub const COLUMNS_COUNT_KEY: &str = "columnsCount";
/// Store key for the grid row count
pub const ROWS_COUNT_KEY: &str = "rowsCount";
/// Store key for the shared zoom percentage
pub const ZOOM_KEY: &str = "zoom";
/// Store key for the side menu state
pub const SIDE_MENU_VISIBILITY_KEY: &str = "sideMenuVisibility";

/// Upper bound for the column and row steppers
pub const MAX_GRID_DIMENSION: u32 = 12;

/// Everything the grid persists between runs
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    /// Pane URLs in slot order; empty string = blank pane
    pub urls: Vec<String>,
    pub columns_count: u32,
    pub rows_count: u32,
    pub zoom: ZoomPercent,
    pub side_menu_visibility: SideMenuVisibility,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            columns_count: defaults::columns_count(),
            rows_count: defaults::rows_count(),
            zoom: ZoomPercent::default(),
            side_menu_visibility: SideMenuVisibility::default(),
        }
    }
}

impl GridState {
    /// Read the state from `store`, falling back to defaults for missing
    /// entries and clamping out-of-range values
    pub fn load(store: &dyn StateStore) -> Self {
        let mut state = Self::default();

        if let Some(urls) = store.get_string_list(URLS_KEY) {
            state.urls = urls;
        }
        if let Some(columns) = store.get_integer(COLUMNS_COUNT_KEY) {
            state.columns_count = clamp_dimension(COLUMNS_COUNT_KEY, columns);
        }
        if let Some(rows) = store.get_integer(ROWS_COUNT_KEY) {
            state.rows_count = clamp_dimension(ROWS_COUNT_KEY, rows);
        }
        if let Some(zoom) = store.get_integer(ZOOM_KEY) {
            if !ZoomPercent::is_valid(zoom) {
                log::warn!("Stored zoom {} out of range, clamping", zoom);
            }
            state.zoom = ZoomPercent::clamped(zoom);
        }
        if let Some(raw) = store.get_text(SIDE_MENU_VISIBILITY_KEY) {
            match SideMenuVisibility::from_stored(&raw) {
                Some(visibility) => state.side_menu_visibility = visibility,
                None => log::warn!("Unknown side menu visibility '{}', using default", raw),
            }
        }

        log::info!(
            "Loaded grid state: {} panes, {}x{} grid, zoom {}",
            state.urls.len(),
            state.columns_count,
            state.rows_count,
            state.zoom
        );
        state
    }

    /// Write every entry to `store` (does not flush)
    pub fn save(&self, store: &mut dyn StateStore) {
        store.set_string_list(URLS_KEY, &self.urls);
        store.set_integer(COLUMNS_COUNT_KEY, i64::from(self.columns_count));
        store.set_integer(ROWS_COUNT_KEY, i64::from(self.rows_count));
        store.set_integer(ZOOM_KEY, i64::from(self.zoom.get()));
        store.set_text(SIDE_MENU_VISIBILITY_KEY, self.side_menu_visibility.as_str());
    }
}

/// Clamp a stored column/row count to 1..=MAX_GRID_DIMENSION
pub fn clamp_dimension(key: &str, value: i64) -> u32 {
    let clamped = value.clamp(1, i64::from(MAX_GRID_DIMENSION));
    if clamped != value {
        log::warn!("Stored {} {} out of range, clamping to {}", key, value, clamped);
    }
    clamped as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MemoryStateStore, StoredValue};

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStateStore::new();
        let state = GridState::load(&store);
        assert_eq!(state, GridState::default());
        assert_eq!(state.columns_count, 3);
        assert_eq!(state.rows_count, 2);
        assert_eq!(state.zoom.get(), 70);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStateStore::new();
        let state = GridState {
            urls: vec!["https://a.com".to_string(), String::new()],
            columns_count: 4,
            rows_count: 3,
            zoom: ZoomPercent::clamped(85),
            side_menu_visibility: SideMenuVisibility::Expanded,
        };
        state.save(&mut store);
        assert_eq!(GridState::load(&store), state);
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let mut store = MemoryStateStore::new();
        store.set_integer(COLUMNS_COUNT_KEY, 0);
        store.set_integer(ROWS_COUNT_KEY, 99);
        store.set(ZOOM_KEY, StoredValue::Float(42.0));

        let state = GridState::load(&store);
        assert_eq!(state.columns_count, 1);
        assert_eq!(state.rows_count, MAX_GRID_DIMENSION);
        assert_eq!(state.zoom.get(), 50);
    }

    #[test]
    fn test_unknown_side_menu_value_keeps_default() {
        let mut store = MemoryStateStore::new();
        store.set_text(SIDE_MENU_VISIBILITY_KEY, "detailOnly");
        let state = GridState::load(&store);
        assert_eq!(state.side_menu_visibility, SideMenuVisibility::Collapsed);
    }
}
