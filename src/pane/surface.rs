//! Contract between a pane and the embedded browser engine.
//!
//! The engine itself (page loading, rendering, scripts, cookies) is out of
//! reach of this crate. A host wraps its web view in a [`NavigableSurface`]
//! and reports what happened through [`SurfaceEvent`]s, either by calling
//! [`crate::grid::PaneGrid::handle_surface_event`] from its callbacks or by
//! queueing them for [`NavigableSurface::drain_events`].
//!
//! Commands never block and never report their effect synchronously.

use super::types::{PaneId, SurfaceEvent};

/// An embedded browser view as seen by its pane
pub trait NavigableSurface {
    /// Start loading `url`
    ///
    /// Completion is reported as `DidFinish { requested: url, .. }` or
    /// `DidFail { requested: url, .. }` with `url` echoed verbatim.
    fn navigate(&mut self, url: &str);

    /// Reload the current page; reported like a navigation to the current URL
    fn reload(&mut self);

    /// Step back in history; reported as `Navigated`
    fn go_back(&mut self);

    /// Step forward in history; reported as `Navigated`
    fn go_forward(&mut self);

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// URL the surface currently displays
    fn current_url(&self) -> Option<String>;

    /// Page zoom as a scale factor (1.0 = 100%)
    fn set_zoom(&mut self, factor: f64);

    /// Cancel any load and show nothing
    fn clear(&mut self) {}

    /// Free engine resources; no callbacks may follow
    fn release(&mut self) {}

    /// Callbacks queued since the last call, oldest first
    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        Vec::new()
    }
}

/// Creates one surface per new pane
pub trait SurfaceFactory {
    type Surface: NavigableSurface;

    fn create_surface(&mut self, pane: PaneId) -> Self::Surface;
}
