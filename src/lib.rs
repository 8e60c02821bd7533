// Library exports for testing and for hosts embedding the grid
//
// A host wraps its web view in `pane::NavigableSurface`, hands a
// `pane::SurfaceFactory` to `grid::PaneGrid`, and forwards its load
// callbacks to `PaneGrid::handle_surface_event`. The `browser-grid` binary
// drives the same grid over `pane::HeadlessSurface`.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod cli;
pub mod collection;
pub mod config;
pub mod grid;
pub mod layout;
pub mod pane;
pub mod url_normalizer;
