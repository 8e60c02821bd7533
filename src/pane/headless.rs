//! In-process surface with a real back/forward history.
//!
//! Loads complete as soon as they are commanded: every command queues the
//! callback a web engine would deliver, and the grid picks them up through
//! [`NavigableSurface::drain_events`]. Redirects and failing hosts can be
//! configured up front, which is how the CLI and the tests drive the full
//! submit/observe cycle without a browser engine.

use super::surface::{NavigableSurface, SurfaceFactory};
use super::types::{PaneId, SurfaceEvent};
use std::collections::{HashMap, HashSet, VecDeque};

/// A command received from the pane, recorded for inspection
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Navigate(String),
    Reload,
    GoBack,
    GoForward,
    SetZoom(f64),
    Clear,
    Release,
}

/// Headless [`NavigableSurface`]
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    back: Vec<String>,
    current: Option<String>,
    forward: Vec<String>,
    pending: VecDeque<SurfaceEvent>,
    redirects: HashMap<String, String>,
    unreachable: HashSet<String>,
    zoom_factor: f64,
    released: bool,
    commands: Vec<SurfaceCommand>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            zoom_factor: 1.0,
            ..Self::default()
        }
    }

    /// Loads of `from` end up at `to`
    pub fn add_redirect(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.redirects.insert(from.into(), to.into());
    }

    /// Loads of `url` fail
    pub fn add_unreachable(&mut self, url: impl Into<String>) {
        self.unreachable.insert(url.into());
    }

    /// Simulate the user clicking a link inside the page
    pub fn click_link(&mut self, url: &str) {
        if self.released {
            return;
        }
        self.push_history(url.to_string());
        self.pending.push_back(SurfaceEvent::Navigated {
            url: url.to_string(),
        });
    }

    /// Every command received so far
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Number of navigate commands received so far
    pub fn navigate_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, SurfaceCommand::Navigate(_)))
            .count()
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Callbacks not yet drained
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    fn push_history(&mut self, url: String) {
        if let Some(current) = self.current.take() {
            self.back.push(current);
        }
        self.forward.clear();
        self.current = Some(url);
    }

    fn record(&mut self, command: SurfaceCommand) -> bool {
        if self.released {
            log::warn!("Command {:?} sent to released surface", command);
            return false;
        }
        self.commands.push(command);
        true
    }
}

impl NavigableSurface for HeadlessSurface {
    fn navigate(&mut self, url: &str) {
        if !self.record(SurfaceCommand::Navigate(url.to_string())) {
            return;
        }
        if self.unreachable.contains(url) {
            self.pending.push_back(SurfaceEvent::DidFail {
                requested: url.to_string(),
                reason: format!("could not connect to {url}"),
            });
            return;
        }
        let loaded = self
            .redirects
            .get(url)
            .cloned()
            .unwrap_or_else(|| url.to_string());
        self.push_history(loaded.clone());
        self.pending.push_back(SurfaceEvent::DidFinish {
            requested: url.to_string(),
            url: loaded,
        });
    }

    fn reload(&mut self) {
        if !self.record(SurfaceCommand::Reload) {
            return;
        }
        if let Some(current) = self.current.clone() {
            self.pending.push_back(SurfaceEvent::DidFinish {
                requested: current.clone(),
                url: current,
            });
        }
    }

    fn go_back(&mut self) {
        if !self.record(SurfaceCommand::GoBack) {
            return;
        }
        if let Some(previous) = self.back.pop() {
            if let Some(current) = self.current.take() {
                self.forward.push(current);
            }
            self.current = Some(previous.clone());
            self.pending
                .push_back(SurfaceEvent::Navigated { url: previous });
        }
    }

    fn go_forward(&mut self) {
        if !self.record(SurfaceCommand::GoForward) {
            return;
        }
        if let Some(next) = self.forward.pop() {
            if let Some(current) = self.current.take() {
                self.back.push(current);
            }
            self.current = Some(next.clone());
            self.pending.push_back(SurfaceEvent::Navigated { url: next });
        }
    }

    fn can_go_back(&self) -> bool {
        !self.released && !self.back.is_empty()
    }

    fn can_go_forward(&self) -> bool {
        !self.released && !self.forward.is_empty()
    }

    fn current_url(&self) -> Option<String> {
        self.current.clone()
    }

    fn set_zoom(&mut self, factor: f64) {
        if self.record(SurfaceCommand::SetZoom(factor)) {
            self.zoom_factor = factor;
        }
    }

    fn clear(&mut self) {
        if self.record(SurfaceCommand::Clear) {
            self.pending.clear();
            if let Some(current) = self.current.take() {
                self.back.push(current);
            }
        }
    }

    fn release(&mut self) {
        if self.record(SurfaceCommand::Release) {
            self.pending.clear();
            self.released = true;
        }
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        self.pending.drain(..).collect()
    }
}

/// Creates [`HeadlessSurface`]s sharing one redirect/failure table
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurfaceFactory {
    redirects: HashMap<String, String>,
    unreachable: HashSet<String>,
    created: usize,
}

impl HeadlessSurfaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads of `from` end up at `to` in every surface created afterwards
    pub fn with_redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.redirects.insert(from.into(), to.into());
        self
    }

    /// Loads of `url` fail in every surface created afterwards
    pub fn with_unreachable(mut self, url: impl Into<String>) -> Self {
        self.unreachable.insert(url.into());
        self
    }

    /// Number of surfaces created so far
    pub fn created(&self) -> usize {
        self.created
    }
}

impl SurfaceFactory for HeadlessSurfaceFactory {
    type Surface = HeadlessSurface;

    fn create_surface(&mut self, pane: PaneId) -> HeadlessSurface {
        self.created += 1;
        crate::debug_trace!("SURFACE", "Creating headless surface for pane {}", pane);
        let mut surface = HeadlessSurface::new();
        surface.redirects = self.redirects.clone();
        surface.unreachable = self.unreachable.clone();
        surface
    }
}
