//! Navigation state machine for a single pane.
//!
//! Commands flow into the surface (`submit`, `reload`, `go_back`, ...) and
//! facts flow back out of it (`surface_did_finish`, `observe_surface_url`,
//! `surface_did_fail`). Facts only ever update the stored state; they never
//! turn into another navigate command, so a redirect can't start a reload
//! loop. Every change of the visible URL is reported as a [`UrlChange`] for
//! the grid to persist.

use super::surface::NavigableSurface;
use super::types::{PaneId, PaneState, SurfaceEvent, UrlChange};
use crate::config::{SchemePolicy, ZoomPercent};
use crate::url_normalizer::{NormalizedUrl, normalize};

/// Drives one [`NavigableSurface`]
#[derive(Debug)]
pub struct PaneController<S: NavigableSurface> {
    id: PaneId,
    /// Position in the collection; changes when earlier panes close
    index: usize,
    state: PaneState,
    /// `None` once closed
    surface: Option<S>,
    scheme_policy: SchemePolicy,
    zoom: ZoomPercent,
}

impl<S: NavigableSurface> PaneController<S> {
    /// Wrap `surface` in a blank controller and apply the shared zoom
    pub fn new(
        id: PaneId,
        index: usize,
        mut surface: S,
        scheme_policy: SchemePolicy,
        zoom: ZoomPercent,
    ) -> Self {
        surface.set_zoom(zoom.factor());
        Self {
            id,
            index,
            state: PaneState::Blank,
            surface: Some(surface),
            scheme_policy,
            zoom,
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn state(&self) -> &PaneState {
        &self.state
    }

    /// URL shown in the address field (pending target while loading)
    pub fn current_url(&self) -> Option<&str> {
        self.state.visible_url()
    }

    pub fn zoom_percent(&self) -> ZoomPercent {
        self.zoom
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    pub fn can_go_back(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.can_go_back())
    }

    pub fn can_go_forward(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.can_go_forward())
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Load what the user typed
    ///
    /// Blank text clears the pane. Anything else is normalized and sent to
    /// the surface; the pane shows the target until the load settles.
    pub fn submit(&mut self, text: &str) -> Option<UrlChange> {
        if self.is_closed() {
            crate::debug_log!("PANE", "Pane {} closed, ignoring submit", self.id);
            return None;
        }
        let before = self.visible();
        self.navigate_to(normalize(text, self.scheme_policy));
        self.change_from(before)
    }

    /// Blank the pane, then submit `text`
    ///
    /// Reported as a single change from the old URL to the new one.
    pub fn resubmit(&mut self, text: &str) -> Option<UrlChange> {
        if self.is_closed() {
            return None;
        }
        let before = self.visible();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        self.state = PaneState::Blank;
        self.navigate_to(normalize(text, self.scheme_policy));
        self.change_from(before)
    }

    /// A commanded load completed
    pub fn surface_did_finish(&mut self, requested: &str, url: &str) -> Option<UrlChange> {
        match &self.state {
            PaneState::Loading { target, .. } if target == requested => {
                crate::debug_info!("PANE", "Pane {} loaded {}", self.id, url);
                let before = self.visible();
                self.state = PaneState::Loaded {
                    url: url.to_string(),
                };
                self.change_from(before)
            }
            _ => {
                crate::debug_log!(
                    "PANE",
                    "Pane {} discarding superseded finish for {}",
                    self.id,
                    requested
                );
                None
            }
        }
    }

    /// A commanded load failed
    ///
    /// The pane falls back to the last loaded URL, or keeps the attempted
    /// address when nothing had loaded yet. Not retried.
    pub fn surface_did_fail(&mut self, requested: &str, reason: &str) -> Option<UrlChange> {
        let PaneState::Loading { target, previous } = &self.state else {
            crate::debug_log!(
                "PANE",
                "Pane {} discarding failure for {} (not loading)",
                self.id,
                requested
            );
            return None;
        };
        if target != requested {
            crate::debug_log!(
                "PANE",
                "Pane {} discarding superseded failure for {}",
                self.id,
                requested
            );
            return None;
        }
        log::warn!("Pane {} failed to load {}: {}", self.id, requested, reason);
        let url = previous.clone().unwrap_or_else(|| target.clone());
        let before = self.visible();
        self.state = PaneState::Loaded { url };
        self.change_from(before)
    }

    /// The surface moved on its own (link click, redirect, history step)
    ///
    /// Only the stored URL is updated. A pending navigation wins over the
    /// observation; its own finish callback settles the state.
    pub fn observe_surface_url(&mut self, url: &str) -> Option<UrlChange> {
        match &self.state {
            PaneState::Closed => None,
            PaneState::Loading { target, .. } => {
                crate::debug_log!(
                    "PANE",
                    "Pane {} ignoring {}, superseded by pending navigation to {}",
                    self.id,
                    url,
                    target
                );
                None
            }
            PaneState::Loaded { url: current } if current == url => None,
            PaneState::Blank | PaneState::Loaded { .. } => {
                let before = self.visible();
                self.state = PaneState::Loaded {
                    url: url.to_string(),
                };
                self.change_from(before)
            }
        }
    }

    /// Dispatch a surface callback to the matching handler
    pub fn handle_event(&mut self, event: &SurfaceEvent) -> Option<UrlChange> {
        match event {
            SurfaceEvent::DidFinish { requested, url } => self.surface_did_finish(requested, url),
            SurfaceEvent::Navigated { url } => self.observe_surface_url(url),
            SurfaceEvent::DidFail { requested, reason } => self.surface_did_fail(requested, reason),
        }
    }

    /// Reload the current page, or re-issue a pending load
    ///
    /// Returns `false` when there is nothing to reload.
    pub fn reload(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        match &self.state {
            PaneState::Loaded { url } => {
                let url = url.clone();
                // After a failed first load the pane keeps the attempted URL
                // while the surface shows nothing; only a navigate loads it.
                let shown = surface.current_url();
                if shown.as_deref() == Some(url.as_str()) {
                    crate::debug_info!("PANE", "Pane {} reloading {}", self.id, url);
                    surface.reload();
                } else {
                    crate::debug_info!("PANE", "Pane {} re-navigating to {}", self.id, url);
                    surface.navigate(&url);
                }
                self.state = PaneState::Loading {
                    target: url,
                    previous: shown,
                };
                true
            }
            PaneState::Loading { target, .. } => {
                crate::debug_info!("PANE", "Pane {} re-issuing {}", self.id, target);
                surface.navigate(target);
                true
            }
            PaneState::Blank | PaneState::Closed => false,
        }
    }

    /// Step back in the surface's history
    ///
    /// No-op unless the surface reports it can go back. The history step
    /// itself is reported later through `observe_surface_url`.
    pub fn go_back(&mut self) -> (bool, Option<UrlChange>) {
        if !self.can_go_back() {
            return (false, None);
        }
        let change = self.drop_pending();
        if let Some(surface) = self.surface.as_mut() {
            surface.go_back();
        }
        (true, change)
    }

    /// Step forward in the surface's history
    pub fn go_forward(&mut self) -> (bool, Option<UrlChange>) {
        if !self.can_go_forward() {
            return (false, None);
        }
        let change = self.drop_pending();
        if let Some(surface) = self.surface.as_mut() {
            surface.go_forward();
        }
        (true, change)
    }

    pub fn apply_zoom(&mut self, zoom: ZoomPercent) {
        self.zoom = zoom;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_zoom(zoom.factor());
        }
    }

    /// Tear down; later callbacks are ignored
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }
        crate::debug_info!("PANE", "Closing pane {} at index {}", self.id, self.index);
        self.state = PaneState::Closed;
        if let Some(mut surface) = self.surface.take() {
            surface.release();
        }
    }

    fn navigate_to(&mut self, normalized: NormalizedUrl) {
        let previous = self.state.loaded_url().map(str::to_string);
        match normalized {
            NormalizedUrl::Blank => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.clear();
                }
                self.state = PaneState::Blank;
            }
            NormalizedUrl::Url(target) => {
                crate::debug_info!("PANE", "Pane {} navigating to {}", self.id, target);
                if let Some(surface) = self.surface.as_mut() {
                    surface.navigate(&target);
                }
                self.state = PaneState::Loading { target, previous };
            }
        }
    }

    /// Forget a pending target before a history step takes over
    fn drop_pending(&mut self) -> Option<UrlChange> {
        let PaneState::Loading { previous, .. } = &self.state else {
            return None;
        };
        let before = self.visible();
        self.state = match previous.clone() {
            Some(url) => PaneState::Loaded { url },
            None => PaneState::Blank,
        };
        self.change_from(before)
    }

    fn visible(&self) -> Option<String> {
        self.current_url().map(str::to_string)
    }

    fn change_from(&self, before: Option<String>) -> Option<UrlChange> {
        let after = self.visible();
        (after != before).then(|| UrlChange {
            pane: self.id,
            url: after,
        })
    }
}
