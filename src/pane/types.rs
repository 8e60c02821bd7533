//! Core types for the pane system.

use super::chrome::PaneChrome;
use super::controller::PaneController;
use super::surface::NavigableSurface;

/// Unique identifier for a pane controller
///
/// Assigned once when the controller is created and never reused, unlike the
/// pane's index, which shifts when earlier panes close. Surface callbacks are
/// addressed by `PaneId` so a late callback from a closed pane can't land on
/// the pane that moved into its slot.
pub type PaneId = u64;

/// Navigation state of one pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneState {
    /// No URL; the pane shows its placeholder
    Blank,
    /// A commanded navigation is in flight
    Loading {
        /// URL the surface was told to load
        target: String,
        /// Last loaded URL, restored if the load fails
        previous: Option<String>,
    },
    /// The surface shows `url`
    Loaded { url: String },
    /// Torn down; terminal
    Closed,
}

impl PaneState {
    /// URL the pane presents to the outside world
    pub fn visible_url(&self) -> Option<&str> {
        match self {
            PaneState::Loading { target, .. } => Some(target),
            PaneState::Loaded { url } => Some(url),
            PaneState::Blank | PaneState::Closed => None,
        }
    }

    /// Last successfully loaded URL
    pub fn loaded_url(&self) -> Option<&str> {
        match self {
            PaneState::Loading { previous, .. } => previous.as_deref(),
            PaneState::Loaded { url } => Some(url),
            PaneState::Blank | PaneState::Closed => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PaneState::Loading { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, PaneState::Closed)
    }
}

/// Callback from a navigable surface
///
/// Delivered on the UI thread, in order per pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A commanded load completed; `url` may differ from `requested` after
    /// redirects
    DidFinish { requested: String, url: String },
    /// The surface moved on its own: link click, in-page navigation,
    /// back/forward
    Navigated { url: String },
    /// A commanded load failed (DNS, TLS, timeout)
    DidFail { requested: String, reason: String },
}

/// A pane's visible URL changed and should be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlChange {
    pub pane: PaneId,
    /// New URL; `None` for a blank pane
    pub url: Option<String>,
}

impl UrlChange {
    /// Form stored in the pane collection (blank = empty string)
    pub fn stored_form(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// One grid cell: the navigation controller plus its UI-only state
#[derive(Debug)]
pub struct Pane<S: NavigableSurface> {
    pub controller: PaneController<S>,
    pub chrome: PaneChrome,
}

impl<S: NavigableSurface> Pane<S> {
    pub fn new(controller: PaneController<S>) -> Self {
        let chrome = PaneChrome::new(controller.current_url());
        Self { controller, chrome }
    }

    /// Stable identifier of this pane
    pub fn id(&self) -> PaneId {
        self.controller.id()
    }
}
