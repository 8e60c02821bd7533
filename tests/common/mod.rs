//! Shared integration test helpers for browser-grid.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{grid_with_urls, TestContext};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use browser_grid::config::{Config, GridState, MemoryStateStore, SchemePolicy, ZoomPercent};
use browser_grid::grid::PaneGrid;
use browser_grid::pane::{HeadlessSurface, HeadlessSurfaceFactory, PaneController};
use std::path::PathBuf;
use tempfile::TempDir;

pub type HeadlessGrid = PaneGrid<HeadlessSurfaceFactory>;

/// Empty grid with default config over headless surfaces
pub fn empty_grid() -> HeadlessGrid {
    PaneGrid::new(&Config::default(), HeadlessSurfaceFactory::new())
}

/// Grid with one pane per URL, each submitted and settled
pub fn grid_with_urls(urls: &[&str]) -> HeadlessGrid {
    grid_with_factory(urls, HeadlessSurfaceFactory::new())
}

/// Like [`grid_with_urls`] with a preconfigured factory
pub fn grid_with_factory(urls: &[&str], factory: HeadlessSurfaceFactory) -> HeadlessGrid {
    let mut grid = PaneGrid::new(&Config::default(), factory);
    for url in urls {
        let index = grid.open_new_window();
        grid.submit(index, url).expect("index was just opened");
    }
    grid.pump_surface_events();
    grid
}

/// Grid built from persisted entries without restoring them
pub fn grid_from_state(state: GridState) -> HeadlessGrid {
    let mut store = MemoryStateStore::new();
    state.save(&mut store);
    PaneGrid::load(&Config::default(), &store, HeadlessSurfaceFactory::new())
}

/// Blank controller over a fresh headless surface
pub fn controller(id: u64) -> PaneController<HeadlessSurface> {
    PaneController::new(
        id,
        0,
        HeadlessSurface::new(),
        SchemePolicy::Https,
        ZoomPercent::default(),
    )
}

/// Deliver everything the controller's surface has queued
pub fn settle(pane: &mut PaneController<HeadlessSurface>) -> usize {
    let events = pane
        .surface_mut()
        .map(|surface| {
            use browser_grid::pane::NavigableSurface;
            surface.drain_events()
        })
        .unwrap_or_default();
    events
        .iter()
        .filter_map(|event| pane.handle_event(event))
        .count()
}

/// Temporary directory holding config and state files
///
/// Files are deleted when the context is dropped.
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn state_path(&self) -> PathBuf {
        self.temp_dir.path().join("state.yaml")
    }
}
