mod common;

use browser_grid::config::{
    Config, GridState, LayoutMode, NamedLayout, StateStore, YamlStateStore, ZoomPercent,
};
use browser_grid::grid::{GridError, PaneGrid};
use browser_grid::layout::Viewport;
use browser_grid::pane::{HeadlessSurfaceFactory, PaneState, SurfaceCommand, SurfaceEvent};
use common::{TestContext, empty_grid, grid_from_state, grid_with_factory, grid_with_urls};

#[test]
fn test_zoom_fans_out_to_every_pane() {
    let mut grid = grid_with_urls(&["a.com", "b.com", "c.com"]);
    assert_eq!(grid.zoom().get(), 70);

    grid.set_zoom(ZoomPercent::clamped(85));
    for pane in grid.panes() {
        let surface = pane.controller.surface().unwrap();
        assert!((surface.zoom_factor() - 0.85).abs() < 1e-9);
        assert_eq!(pane.controller.zoom_percent().get(), 85);
    }
}

#[test]
fn test_new_pane_gets_current_zoom() {
    let mut grid = empty_grid();
    grid.set_zoom(ZoomPercent::clamped(55));
    let index = grid.open_new_window();
    let surface = grid.pane(index).unwrap().controller.surface().unwrap();
    assert!((surface.zoom_factor() - 0.55).abs() < 1e-9);
}

#[test]
fn test_close_all_then_open() {
    let mut grid = grid_with_urls(&["a.com", "b.com"]);
    grid.close_all_windows();
    assert!(grid.is_empty());
    assert!(grid.urls().is_empty());

    grid.open_new_window();
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.urls(), [""]);
    assert_eq!(grid.pane(0).unwrap().controller.state(), &PaneState::Blank);
}

#[test]
fn test_close_removes_first_match_only() {
    let mut grid = grid_with_urls(&["a.com", "", "b.com"]);
    grid.open_new_window();
    assert_eq!(grid.close_window("").unwrap(), 1);
    assert_eq!(grid.urls(), ["https://a.com", "https://b.com", ""]);
    assert_eq!(grid.len(), 3);
}

#[test]
fn test_closed_pane_releases_surface_and_drops_callbacks() {
    let mut grid = grid_with_urls(&["a.com", "b.com", "c.com"]);
    let closed = grid.pane(1).unwrap().id();
    let shifted = grid.pane(2).unwrap().id();

    grid.close_window_at(1).unwrap();
    assert_eq!(grid.index_of(closed), None);
    assert_eq!(grid.index_of(shifted), Some(1));

    // A late callback for the closed pane must not land on the pane now at index 1
    let delivered = grid.handle_surface_event(
        closed,
        &SurfaceEvent::Navigated {
            url: "https://late.example".to_string(),
        },
    );
    assert!(!delivered);
    assert_eq!(grid.urls(), ["https://a.com", "https://c.com"]);
}

#[test]
fn test_redirect_updates_persisted_url_without_reload() {
    let factory = HeadlessSurfaceFactory::new().with_redirect("https://a.com", "https://www.a.com/");
    let mut grid = grid_with_factory(&["a.com"], factory);
    assert_eq!(grid.urls(), ["https://www.a.com/"]);

    for _ in 0..3 {
        assert_eq!(grid.pump_surface_events(), 0);
    }
    let surface = grid.pane(0).unwrap().controller.surface().unwrap();
    assert_eq!(surface.navigate_count(), 1);
    assert_eq!(grid.pane(0).unwrap().chrome.draft, "https://www.a.com/");
}

#[test]
fn test_failed_load_keeps_previous_url() {
    let factory = HeadlessSurfaceFactory::new().with_unreachable("https://down.test");
    let mut grid = grid_with_factory(&["a.com"], factory);
    grid.submit(0, "down.test").unwrap();
    assert_eq!(grid.urls(), ["https://down.test"]);

    grid.pump_surface_events();
    assert_eq!(grid.urls(), ["https://a.com"]);
}

#[test]
fn test_back_and_forward_through_grid() {
    let mut grid = grid_with_urls(&["a.com"]);
    grid.submit(0, "b.com").unwrap();
    grid.pump_surface_events();

    assert!(grid.go_back(0).unwrap());
    grid.pump_surface_events();
    assert_eq!(grid.urls(), ["https://a.com"]);

    assert!(grid.go_forward(0).unwrap());
    grid.pump_surface_events();
    assert_eq!(grid.urls(), ["https://b.com"]);
    assert!(!grid.go_forward(0).unwrap());
}

#[test]
fn test_reload_all_skips_blank_panes() {
    let mut grid = grid_with_urls(&["a.com", "", "b.com"]);
    assert_eq!(grid.reload_all_windows(), 2);
    grid.pump_surface_events();
    for (index, pane) in grid.panes().iter().enumerate() {
        let reloads = pane
            .controller
            .surface()
            .unwrap()
            .commands()
            .iter()
            .filter(|c| **c == SurfaceCommand::Reload)
            .count();
        assert_eq!(reloads, usize::from(index != 1));
    }
}

#[test]
fn test_per_pane_commands_reject_bad_index() {
    let mut grid = grid_with_urls(&["a.com"]);
    assert!(matches!(
        grid.reload_pane(1),
        Err(GridError::PaneIndexOutOfRange { index: 1, len: 1 })
    ));
    assert!(grid.go_forward(9).is_err());
    assert!(grid.edit_draft(2, "x").is_err());
    assert_eq!(grid.urls(), ["https://a.com"]);
}

#[test]
fn test_slots_follow_collection() {
    let mut grid = grid_with_urls(&["a.com", "b.com", "c.com", "d.com"]);
    let slots = grid.slots(Viewport::new(1500.0, 1000.0));
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[3].row, 1);
    assert_eq!(slots[3].entry, Some(3));

    grid.set_layout_mode(LayoutMode::Named(NamedLayout::ThreeByThree));
    let slots = grid.slots(Viewport::new(1500.0, 1000.0));
    assert_eq!(slots.len(), 9);
    assert_eq!(slots.iter().filter(|s| s.is_placeholder()).count(), 5);
}

#[test]
fn test_state_round_trip_through_yaml_store() {
    let ctx = TestContext::new();
    let mut grid = grid_with_urls(&["a.com", ""]);
    grid.set_columns(4).unwrap();
    grid.set_rows(1).unwrap();
    grid.set_zoom(ZoomPercent::clamped(90));
    grid.toggle_side_menu();

    let mut store = YamlStateStore::open(ctx.state_path()).unwrap();
    grid.save(&mut store).unwrap();
    assert!(!store.is_dirty());

    let reopened = YamlStateStore::open(ctx.state_path()).unwrap();
    let mut restored = PaneGrid::load(&Config::default(), &reopened, HeadlessSurfaceFactory::new());
    assert_eq!(restored.state(), grid.state());

    assert_eq!(restored.restore(), 1);
    restored.pump_surface_events();
    assert_eq!(
        restored.pane(0).unwrap().controller.current_url(),
        Some("https://a.com")
    );
    assert_eq!(restored.pane(1).unwrap().controller.state(), &PaneState::Blank);
}

#[test]
fn test_out_of_range_state_is_clamped() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.state_path(),
        "urls:\n- https://a.com\ncolumnsCount: 0\nrowsCount: 40\nzoom: 120\n",
    )
    .unwrap();
    let store = YamlStateStore::open(ctx.state_path()).unwrap();
    assert_eq!(store.get_integer("zoom"), Some(120));

    let grid = PaneGrid::load(&Config::default(), &store, HeadlessSurfaceFactory::new());
    assert_eq!(grid.layout().columns, 1);
    assert_eq!(grid.layout().rows, 12);
    assert_eq!(grid.zoom().get(), 100);
    assert_eq!(grid.urls(), ["https://a.com"]);
}

#[test]
fn test_restore_normalizes_legacy_entries() {
    let mut grid = grid_from_state(GridState {
        urls: vec!["example.com".to_string(), "http://old.test".to_string()],
        ..GridState::default()
    });
    grid.restore();
    grid.pump_surface_events();
    assert_eq!(grid.urls(), ["https://example.com", "http://old.test"]);
}

#[test]
fn test_save_reports_unwritable_state_file() {
    let ctx = TestContext::new();
    let blocker = ctx.temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let grid = grid_with_urls(&["a.com"]);
    let mut store = YamlStateStore::open(blocker.join("state.yaml")).unwrap();
    assert!(matches!(grid.save(&mut store), Err(GridError::State(_))));
    assert!(store.is_dirty());
}
