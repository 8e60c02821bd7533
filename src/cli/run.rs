//! Executes one CLI command against the persisted grid.

use super::{Commands, RuntimeOptions};
use crate::config::{Config, YamlStateStore, ZoomPercent};
use crate::grid::PaneGrid;
use crate::layout::{Viewport, rows_used};
use crate::pane::{HeadlessSurfaceFactory, PaneState, SurfaceFactory};
use crate::url_normalizer::display_address;
use anyhow::{Context, Result};
use std::io::Write;

/// Load config and state, run `options.command`, save the result
pub fn run(options: RuntimeOptions, out: &mut dyn Write) -> Result<()> {
    let config_path = options.config_path.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if options.log_level.is_none() && std::env::var_os("RUST_LOG").is_none() {
        crate::debug::set_level(config.log_level.to_level_filter());
    }

    let state_path = options.state_path.clone().unwrap_or_else(Config::state_path);
    let mut store = YamlStateStore::open(state_path.clone())
        .with_context(|| format!("Failed to open state file {}", state_path.display()))?;

    let mut grid = PaneGrid::load(&config, &store, HeadlessSurfaceFactory::new());
    grid.restore();
    grid.pump_surface_events();

    execute(&mut grid, &options.command, &config, out)?;
    grid.pump_surface_events();

    if let Commands::Layout { mode } = options.command {
        config.layout_mode = mode;
        config
            .save_to(&config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
    }

    grid.save(&mut store)
        .with_context(|| format!("Failed to save state to {}", state_path.display()))?;
    log::info!("Saved {} panes to {}", grid.len(), state_path.display());
    Ok(())
}

/// Apply `command` to `grid`, writing user-facing output to `out`
///
/// Surface callbacks triggered by the command are not delivered here.
pub fn execute<F: SurfaceFactory>(
    grid: &mut PaneGrid<F>,
    command: &Commands,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    log::info!("Running command {:?}", command);
    match command {
        Commands::List => {
            grid.pump_surface_events();
            print_panes(grid, out)?;
        }
        Commands::Open { url } => {
            let index = grid.open_new_window();
            if let Some(url) = url {
                grid.submit(index, url)?;
            }
            writeln!(out, "Opened pane {index}")?;
        }
        Commands::Navigate { index, text } => {
            grid.submit(*index, text)?;
            let url = grid.urls()[*index].as_str();
            if url.is_empty() {
                writeln!(out, "Cleared pane {index}")?;
            } else {
                writeln!(out, "Pane {index} -> {url}")?;
            }
        }
        Commands::Back { index } => {
            if !grid.go_back(*index)? {
                writeln!(out, "Pane {index} has no back history")?;
            }
        }
        Commands::Forward { index } => {
            if !grid.go_forward(*index)? {
                writeln!(out, "Pane {index} has no forward history")?;
            }
        }
        Commands::Reload { index: Some(index) } => {
            if !grid.reload_pane(*index)? {
                writeln!(out, "Pane {index} is blank, nothing to reload")?;
            }
        }
        Commands::Reload { index: None } => {
            let reloaded = grid.reload_all_windows();
            writeln!(out, "Reloaded {reloaded} panes")?;
        }
        Commands::Close { url } => {
            let index = grid.close_window(url)?;
            writeln!(out, "Closed pane {index}")?;
        }
        Commands::CloseAt { index } => {
            let url = grid.close_window_at(*index)?;
            writeln!(out, "Closed pane {index} ({})", display_or_blank(&url))?;
        }
        Commands::CloseAll => {
            let count = grid.len();
            grid.close_all_windows();
            writeln!(out, "Closed {count} panes")?;
        }
        Commands::Columns { count } => {
            grid.set_columns(*count)?;
            writeln!(out, "Columns: {count}")?;
        }
        Commands::Rows { count } => {
            grid.set_rows(*count)?;
            writeln!(out, "Rows: {count}")?;
        }
        Commands::Zoom { percent } => {
            let zoom = ZoomPercent::clamped(*percent);
            if !ZoomPercent::is_valid(*percent) {
                log::warn!("Zoom {} adjusted to {}", percent, zoom);
            }
            grid.set_zoom(zoom);
            writeln!(out, "Zoom: {zoom}")?;
        }
        Commands::Layout { mode } => {
            grid.set_layout_mode(*mode);
            writeln!(out, "Layout: {mode}")?;
        }
        Commands::ToggleMenu => {
            let visibility = grid.toggle_side_menu();
            writeln!(out, "Side menu: {}", visibility.as_str())?;
        }
        Commands::Slots { width, height } => {
            let viewport = Viewport::new(
                width.unwrap_or(config.viewport_width),
                height.unwrap_or(config.viewport_height),
            );
            print_slots(grid, viewport, out)?;
        }
    }
    Ok(())
}

fn display_or_blank(url: &str) -> String {
    if url.is_empty() {
        "blank".to_string()
    } else {
        display_address(url)
    }
}

fn state_label(state: &PaneState) -> &'static str {
    match state {
        PaneState::Blank => "blank",
        PaneState::Loading { .. } => "loading",
        PaneState::Loaded { .. } => "loaded",
        PaneState::Closed => "closed",
    }
}

fn print_panes<F: SurfaceFactory>(grid: &PaneGrid<F>, out: &mut dyn Write) -> Result<()> {
    let layout = grid.layout();
    writeln!(
        out,
        "{} panes, {}x{} grid ({}), zoom {}",
        grid.len(),
        layout.columns,
        layout.rows,
        layout.mode,
        grid.zoom()
    )?;
    for (index, pane) in grid.panes().iter().enumerate() {
        let url = grid.urls()[index].as_str();
        writeln!(
            out,
            "{:>3}  {:<8} {}",
            index,
            state_label(pane.controller.state()),
            display_or_blank(url)
        )?;
    }
    Ok(())
}

fn print_slots<F: SurfaceFactory>(
    grid: &PaneGrid<F>,
    viewport: Viewport,
    out: &mut dyn Write,
) -> Result<()> {
    let slots = grid.slots(viewport);
    writeln!(
        out,
        "{} slots in {} rows ({}x{} viewport)",
        slots.len(),
        rows_used(&slots),
        viewport.width,
        viewport.height
    )?;
    for slot in &slots {
        let content = match slot.entry {
            Some(entry) => display_or_blank(&grid.urls()[entry]),
            None => "(empty)".to_string(),
        };
        writeln!(
            out,
            "{:>3}  col {} row {}  {:.0},{:.0} {:.0}x{:.0}  {}",
            slot.index,
            slot.column,
            slot.row,
            slot.bounds.x,
            slot.bounds.y,
            slot.bounds.width,
            slot.bounds.height,
            content
        )?;
    }
    Ok(())
}
