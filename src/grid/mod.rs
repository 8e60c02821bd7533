//! Pane grid coordinator
//!
//! Owns the pane collection, one [`Pane`] per entry, and the configuration
//! every pane shares (columns, rows, zoom, layout mode). Everything the
//! window chrome can do goes through here, and so do surface callbacks,
//! which are routed by [`PaneId`] rather than by index.
//!
//! After every call `collection.len() == panes.len()` and pane `i` renders
//! entry `i`.

mod error;

pub use error::{GridError, GridResult};

use crate::collection::PaneCollection;
use crate::config::{
    Config, GridState, LayoutMode, MAX_GRID_DIMENSION, ReloadMode, SchemePolicy,
    SideMenuVisibility, StateStore, ZoomPercent,
};
use crate::layout::{LayoutConfig, Slot, Viewport, compute_slots};
use crate::pane::{
    NavigableSurface, Pane, PaneController, PaneId, SurfaceEvent, SurfaceFactory, UrlChange,
};

/// The browser grid
pub struct PaneGrid<F: SurfaceFactory> {
    collection: PaneCollection,
    /// Same order and length as `collection`
    panes: Vec<Pane<F::Surface>>,
    factory: F,
    layout: LayoutConfig,
    zoom: ZoomPercent,
    side_menu_visibility: SideMenuVisibility,
    scheme_policy: SchemePolicy,
    reload_mode: ReloadMode,
    /// Counter for generating unique pane IDs
    next_pane_id: PaneId,
}

impl<F: SurfaceFactory> PaneGrid<F> {
    /// Grid with no panes and default state
    pub fn new(config: &Config, factory: F) -> Self {
        Self::from_state(config, GridState::default(), factory)
    }

    /// Grid with one blank-surfaced pane per persisted entry
    ///
    /// Nothing is loaded until [`PaneGrid::restore`] is called.
    pub fn from_state(config: &Config, state: GridState, factory: F) -> Self {
        let mut grid = Self {
            collection: PaneCollection::new(),
            panes: Vec::new(),
            factory,
            layout: LayoutConfig::new(config.layout_mode, state.columns_count, state.rows_count),
            zoom: state.zoom,
            side_menu_visibility: state.side_menu_visibility,
            scheme_policy: config.scheme_policy,
            reload_mode: config.reload_mode,
            next_pane_id: 1,
        };
        for url in state.urls {
            let index = grid.collection.append(url);
            let pane = grid.spawn_pane(index);
            grid.panes.push(pane);
        }
        grid
    }

    /// Read [`GridState`] from `store` and build the grid from it
    pub fn load(config: &Config, store: &dyn StateStore, factory: F) -> Self {
        Self::from_state(config, GridState::load(store), factory)
    }

    /// Submit every persisted entry so the panes load what they showed last
    ///
    /// Returns the number of panes that started loading.
    pub fn restore(&mut self) -> usize {
        let mut started = 0;
        for index in 0..self.panes.len() {
            let url = self.collection.get(index).unwrap_or_default().to_string();
            if url.is_empty() {
                continue;
            }
            let submitted = self.submit(index, &url).is_ok();
            if submitted && self.panes[index].controller.state().is_loading() {
                started += 1;
            }
        }
        log::info!("Restored {} of {} panes", started, self.panes.len());
        started
    }

    /// Snapshot of everything that is persisted
    pub fn state(&self) -> GridState {
        GridState {
            urls: self.collection.entries().to_vec(),
            columns_count: self.layout.columns,
            rows_count: self.layout.rows,
            zoom: self.zoom,
            side_menu_visibility: self.side_menu_visibility,
        }
    }

    /// Write the state to `store` and flush it
    pub fn save(&self, store: &mut dyn StateStore) -> GridResult<()> {
        self.state().save(store);
        if let Err(e) = store.flush() {
            crate::debug_error!("GRID", "Failed to flush grid state: {}", e);
            return Err(e.into());
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn collection(&self) -> &PaneCollection {
        &self.collection
    }

    pub fn urls(&self) -> &[String] {
        self.collection.entries()
    }

    pub fn panes(&self) -> &[Pane<F::Surface>] {
        &self.panes
    }

    pub fn pane(&self, index: usize) -> Option<&Pane<F::Surface>> {
        self.panes.get(index)
    }

    pub fn pane_mut(&mut self, index: usize) -> Option<&mut Pane<F::Surface>> {
        self.panes.get_mut(index)
    }

    /// Current index of the pane with `id`
    pub fn index_of(&self, id: PaneId) -> Option<usize> {
        self.panes.iter().position(|pane| pane.id() == id)
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn zoom(&self) -> ZoomPercent {
        self.zoom
    }

    pub fn side_menu_visibility(&self) -> SideMenuVisibility {
        self.side_menu_visibility
    }

    pub fn reload_mode(&self) -> ReloadMode {
        self.reload_mode
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Lay the panes out in `viewport`
    pub fn slots(&self, viewport: Viewport) -> Vec<Slot> {
        compute_slots(self.panes.len(), &self.layout, viewport)
    }

    // ========================================================================
    // Window commands
    // ========================================================================

    /// Append a blank pane and return its index
    pub fn open_new_window(&mut self) -> usize {
        let index = self.collection.append("");
        let pane = self.spawn_pane(index);
        log::info!("Opened pane {} at index {}", pane.id(), index);
        self.panes.push(pane);
        self.check_invariant();
        index
    }

    /// Close the first pane showing `url`, returning its former index
    pub fn close_window(&mut self, url: &str) -> GridResult<usize> {
        let index = self
            .collection
            .position(url)
            .ok_or_else(|| GridError::UrlNotFound(url.to_string()))?;
        self.close_window_at(index)?;
        Ok(index)
    }

    /// Close the pane at `index`, returning the URL it held
    pub fn close_window_at(&mut self, index: usize) -> GridResult<String> {
        self.check_index(index)?;
        let url = self.collection.remove_by_index(index).unwrap_or_default();
        let mut pane = self.panes.remove(index);
        pane.controller.close();
        for (i, pane) in self.panes.iter_mut().enumerate().skip(index) {
            pane.controller.set_index(i);
        }
        log::info!(
            "Closed pane {} at index {} (remaining: {})",
            pane.id(),
            index,
            self.panes.len()
        );
        self.check_invariant();
        Ok(url)
    }

    /// Close every pane
    pub fn close_all_windows(&mut self) {
        for pane in &mut self.panes {
            pane.controller.close();
        }
        self.panes.clear();
        self.collection.close_all();
        log::info!("Closed all panes");
    }

    /// Reload every live pane; returns how many had something to reload
    pub fn reload_all_windows(&mut self) -> usize {
        let reloaded = self
            .panes
            .iter_mut()
            .map(|pane| pane.controller.reload())
            .filter(|reloaded| *reloaded)
            .count();
        crate::debug_info!("GRID", "Reloaded {} panes", reloaded);
        reloaded
    }

    pub fn toggle_side_menu(&mut self) -> SideMenuVisibility {
        self.side_menu_visibility = match self.side_menu_visibility {
            SideMenuVisibility::Expanded => SideMenuVisibility::Collapsed,
            SideMenuVisibility::Collapsed => SideMenuVisibility::Expanded,
        };
        self.side_menu_visibility
    }

    // ========================================================================
    // Shared configuration
    // ========================================================================

    pub fn set_columns(&mut self, columns: u32) -> GridResult<()> {
        self.layout.columns = check_dimension("columns", columns)?;
        crate::debug_info!("GRID", "Columns set to {}", columns);
        Ok(())
    }

    pub fn set_rows(&mut self, rows: u32) -> GridResult<()> {
        self.layout.rows = check_dimension("rows", rows)?;
        crate::debug_info!("GRID", "Rows set to {}", rows);
        Ok(())
    }

    /// Change the shared zoom and apply it to every pane
    pub fn set_zoom(&mut self, zoom: ZoomPercent) {
        self.zoom = zoom;
        for pane in &mut self.panes {
            pane.controller.apply_zoom(zoom);
        }
        crate::debug_info!("GRID", "Zoom set to {} on {} panes", zoom, self.panes.len());
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.layout.mode = mode;
        crate::debug_info!("GRID", "Layout mode set to {}", mode);
    }

    // ========================================================================
    // Per-pane commands
    // ========================================================================

    /// Submit `text` as the address of pane `index`
    pub fn submit(&mut self, index: usize, text: &str) -> GridResult<()> {
        self.check_index(index)?;
        let pane = &mut self.panes[index];
        let change = pane.controller.submit(text);
        pane.chrome.after_submit(pane.controller.current_url());
        if let Some(change) = change {
            self.apply_change(change);
        }
        Ok(())
    }

    /// Submit whatever is in the address field of pane `index`
    pub fn submit_draft(&mut self, index: usize) -> GridResult<()> {
        self.check_index(index)?;
        let draft = self.panes[index].chrome.draft.clone();
        self.submit(index, &draft)
    }

    /// Replace the address field text of pane `index`
    pub fn edit_draft(&mut self, index: usize, text: &str) -> GridResult<()> {
        self.check_index(index)?;
        self.panes[index].chrome.edit_draft(text);
        Ok(())
    }

    pub fn toggle_controls(&mut self, index: usize) -> GridResult<bool> {
        self.check_index(index)?;
        let chrome = &mut self.panes[index].chrome;
        chrome.toggle_controls();
        Ok(chrome.controls_expanded)
    }

    /// Step pane `index` back; `false` when it has no history
    pub fn go_back(&mut self, index: usize) -> GridResult<bool> {
        self.check_index(index)?;
        let (sent, change) = self.panes[index].controller.go_back();
        if let Some(change) = change {
            self.apply_change(change);
        }
        Ok(sent)
    }

    /// Step pane `index` forward; `false` when it has no forward history
    pub fn go_forward(&mut self, index: usize) -> GridResult<bool> {
        self.check_index(index)?;
        let (sent, change) = self.panes[index].controller.go_forward();
        if let Some(change) = change {
            self.apply_change(change);
        }
        Ok(sent)
    }

    /// The per-pane reload button
    ///
    /// Reloads the page, or with [`ReloadMode::Resubmit`] blanks the pane and
    /// submits the address field again.
    pub fn reload_pane(&mut self, index: usize) -> GridResult<bool> {
        self.check_index(index)?;
        match self.reload_mode {
            ReloadMode::Reload => Ok(self.panes[index].controller.reload()),
            ReloadMode::Resubmit => {
                let pane = &mut self.panes[index];
                let draft = pane.chrome.draft.clone();
                let change = pane.controller.resubmit(&draft);
                pane.chrome.after_submit(pane.controller.current_url());
                let loading = pane.controller.state().is_loading();
                if let Some(change) = change {
                    self.apply_change(change);
                }
                Ok(loading)
            }
        }
    }

    // ========================================================================
    // Surface callbacks
    // ========================================================================

    /// Route a callback to the pane that owns `id`
    ///
    /// Callbacks for a closed pane are dropped. Returns whether the event
    /// reached a pane.
    pub fn handle_surface_event(&mut self, id: PaneId, event: &SurfaceEvent) -> bool {
        let Some(index) = self.index_of(id) else {
            crate::debug_log!("GRID", "Dropping {:?} for unknown pane {}", event, id);
            return false;
        };
        if let Some(change) = self.panes[index].controller.handle_event(event) {
            self.apply_change(change);
        }
        true
    }

    /// Deliver every callback queued in the surfaces; returns how many
    pub fn pump_surface_events(&mut self) -> usize {
        let batches: Vec<(PaneId, Vec<SurfaceEvent>)> = self
            .panes
            .iter_mut()
            .filter_map(|pane| {
                let id = pane.id();
                let events = pane.controller.surface_mut()?.drain_events();
                (!events.is_empty()).then_some((id, events))
            })
            .collect();

        let mut delivered = 0;
        for (id, events) in batches {
            for event in &events {
                if self.handle_surface_event(id, event) {
                    delivered += 1;
                }
            }
        }
        if delivered > 0 {
            crate::debug_trace!("GRID", "Delivered {} surface events", delivered);
        }
        delivered
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn spawn_pane(&mut self, index: usize) -> Pane<F::Surface> {
        let id = self.next_pane_id;
        self.next_pane_id += 1;
        let surface = self.factory.create_surface(id);
        Pane::new(PaneController::new(
            id,
            index,
            surface,
            self.scheme_policy,
            self.zoom,
        ))
    }

    /// Persist a visible-URL change into the collection and the chrome
    fn apply_change(&mut self, change: UrlChange) {
        let Some(index) = self.index_of(change.pane) else {
            return;
        };
        self.collection.set_url(index, change.stored_form());
        self.panes[index].chrome.on_url_changed(change.url.as_deref());
        crate::debug_log!(
            "GRID",
            "Pane {} at index {} now shows '{}'",
            change.pane,
            index,
            change.stored_form()
        );
    }

    fn check_index(&self, index: usize) -> GridResult<()> {
        if index < self.panes.len() {
            Ok(())
        } else {
            Err(GridError::PaneIndexOutOfRange {
                index,
                len: self.panes.len(),
            })
        }
    }

    fn check_invariant(&self) {
        debug_assert_eq!(self.collection.len(), self.panes.len());
    }
}

fn check_dimension(name: &'static str, value: u32) -> GridResult<u32> {
    if (1..=MAX_GRID_DIMENSION).contains(&value) {
        Ok(value)
    } else {
        Err(GridError::DimensionOutOfRange {
            name,
            value: i64::from(value),
            max: MAX_GRID_DIMENSION,
        })
    }
}

impl<F> std::fmt::Debug for PaneGrid<F>
where
    F: SurfaceFactory,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaneGrid")
            .field("urls", &self.collection.entries())
            .field("layout", &self.layout)
            .field("zoom", &self.zoom)
            .field("side_menu_visibility", &self.side_menu_visibility)
            .finish_non_exhaustive()
    }
}
