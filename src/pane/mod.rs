//! Browser panes for the grid
//!
//! This module provides the per-cell pieces of the grid:
//! - `PaneController`: navigation state machine driving one surface
//! - `NavigableSurface`: the embedded browser view a controller drives
//! - `PaneChrome`: address draft and expand/collapse state
//! - `HeadlessSurface`: in-process surface used by the CLI and tests
//! - `PaneId`: stable identifier used to route surface callbacks

mod chrome;
mod controller;
mod headless;
mod surface;
mod types;

pub use chrome::PaneChrome;
pub use controller::PaneController;
pub use headless::{HeadlessSurface, HeadlessSurfaceFactory, SurfaceCommand};
pub use surface::{NavigableSurface, SurfaceFactory};
pub use types::{Pane, PaneId, PaneState, SurfaceEvent, UrlChange};
