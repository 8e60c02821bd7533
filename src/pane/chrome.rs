//! Per-pane UI state that has no bearing on navigation.

/// Address field draft and the expand/collapse state of the pane controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneChrome {
    /// Text in the address field
    pub draft: String,
    /// Whether the address bar and buttons are shown
    pub controls_expanded: bool,
    /// The user edited the draft since the pane's URL last changed
    pub draft_dirty: bool,
}

impl PaneChrome {
    /// Chrome for a pane showing `url`; a blank pane starts expanded
    pub fn new(url: Option<&str>) -> Self {
        Self {
            draft: url.unwrap_or_default().to_string(),
            controls_expanded: url.is_none(),
            draft_dirty: false,
        }
    }

    /// The user typed into the address field
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.draft_dirty = true;
    }

    /// Keep the draft in step with the pane unless the user is typing
    pub fn on_url_changed(&mut self, url: Option<&str>) {
        if !self.draft_dirty {
            self.draft = url.unwrap_or_default().to_string();
        }
        if url.is_none() {
            self.controls_expanded = true;
        }
    }

    /// The draft was submitted and the pane now shows `url`
    pub fn after_submit(&mut self, url: Option<&str>) {
        self.draft_dirty = false;
        self.draft = url.unwrap_or_default().to_string();
        self.controls_expanded = url.is_none();
    }

    pub fn toggle_controls(&mut self) {
        self.controls_expanded = !self.controls_expanded;
    }
}
