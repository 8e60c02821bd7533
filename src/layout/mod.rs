//! Grid layout engine
//!
//! Maps the pane collection onto slots of a columns × rows grid. Slot `i`
//! always renders entry `i`; slots sit in row-major order. Every slot is one
//! `viewport / columns` by `viewport / rows` cell, so a grid with more panes
//! than rows × columns grows downward past the viewport and the host
//! scrolls.
//!
//! The computation is pure: same inputs, same slots.

mod bounds;

pub use bounds::{SlotBounds, Viewport};

use crate::config::LayoutMode;

/// Shape inputs for [`compute_slots`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    /// Stepper value, used in [`LayoutMode::Dynamic`]
    pub columns: u32,
    /// Stepper value, used in [`LayoutMode::Dynamic`]
    pub rows: u32,
}

impl LayoutConfig {
    pub fn new(mode: LayoutMode, columns: u32, rows: u32) -> Self {
        Self {
            mode,
            columns,
            rows,
        }
    }

    /// Columns actually used (never zero)
    pub fn effective_columns(&self) -> u32 {
        match self.mode {
            LayoutMode::Dynamic => self.columns.max(1),
            LayoutMode::Named(layout) => layout.columns(),
        }
    }

    /// Rows that fit the viewport (never zero)
    pub fn effective_rows(&self) -> u32 {
        match self.mode {
            LayoutMode::Dynamic => self.rows.max(1),
            LayoutMode::Named(layout) => layout.rows(),
        }
    }

    /// Number of slots laid out for `pane_count` panes
    pub fn slot_count(&self, pane_count: usize) -> usize {
        match self.mode {
            LayoutMode::Dynamic => pane_count,
            LayoutMode::Named(layout) => {
                let columns = layout.columns() as usize;
                let capacity = layout.capacity();
                if pane_count <= capacity {
                    capacity
                } else {
                    pane_count.div_ceil(columns) * columns
                }
            }
        }
    }
}

/// One cell of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub column: u32,
    pub row: u32,
    pub bounds: SlotBounds,
    /// Collection entry rendered here; `None` for an empty placeholder
    pub entry: Option<usize>,
}

impl Slot {
    pub fn is_placeholder(&self) -> bool {
        self.entry.is_none()
    }
}

/// Lay out `pane_count` panes in `viewport`
pub fn compute_slots(pane_count: usize, config: &LayoutConfig, viewport: Viewport) -> Vec<Slot> {
    let columns = config.effective_columns();
    let rows = config.effective_rows();
    let width = viewport.width / columns as f32;
    let height = viewport.height / rows as f32;

    (0..config.slot_count(pane_count))
        .map(|index| {
            let column = (index % columns as usize) as u32;
            let row = (index / columns as usize) as u32;
            Slot {
                index,
                column,
                row,
                bounds: SlotBounds::new(column as f32 * width, row as f32 * height, width, height),
                entry: (index < pane_count).then_some(index),
            }
        })
        .collect()
}

/// Number of rows the slots occupy
pub fn rows_used(slots: &[Slot]) -> u32 {
    slots.iter().map(|slot| slot.row + 1).max().unwrap_or(0)
}

/// Slot under the point `(x, y)`
pub fn slot_at(slots: &[Slot], x: f32, y: f32) -> Option<&Slot> {
    slots.iter().find(|slot| slot.bounds.contains(x, y))
}
