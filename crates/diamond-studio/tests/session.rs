// File: crates/diamond-studio/tests/session.rs
// Purpose: Dispatch loop, scene re-derivation and startup file selection.

use std::rc::Rc;

use diamond_core::{Color, GridPos, Layer, Palette, MAX_GRID_CELLS, MAX_LENGTH_MM};
use diamond_studio::{
    Action, ColorRole, DisplayFlag, FileManager, FrameLayer, NotificationCenter, PathCache, ResetTarget, Session,
};
use tempfile::TempDir;

fn session_in(dir: &TempDir) -> Session {
    let notes = NotificationCenter::shared();
    let cache = PathCache::new(dir.path().join("last_file.json"));
    let files = FileManager::new(Rc::clone(&notes), Some(cache)).with_default_dir(dir.path());
    Session::new(files, notes)
}

#[test]
fn dispatch_bumps_revision_and_refreshes_scene() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.dispatch(Action::SetDisplay(DisplayFlag::ShowFrame, false));
    let before = session.scene().width;
    let rev = session.revision();

    session.dispatch(Action::SetGridSize { columns: 12, rows: 4 });
    assert_eq!(session.revision(), rev + 1);
    assert_eq!(session.scene().width, before + 2 * 60);
}

#[test]
fn offsets_are_clamped_on_dispatch() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.dispatch(Action::SetOffset { x: 60, y: 99 });
    assert_eq!((session.model().size_settings.offset_x, session.model().size_settings.offset_y), (0, 99));
    session.dispatch(Action::SetOffset { x: -59, y: -100 });
    assert_eq!((session.model().size_settings.offset_x, session.model().size_settings.offset_y), (-59, 0));
}

#[test]
fn highlight_actions_drive_diamond_colors() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    let cell = GridPos::new(2, 5);
    session.dispatch(Action::AddHighlight(cell, Palette::LIGHTEST));
    session.dispatch(Action::AssignHighlight(cell, Palette::WHITE));
    assert_eq!(session.model().highlights.len(), 1);
    let white = session.scene().shapes_in(Layer::Diamond).filter(|s| s.fill == Some(Palette::WHITE)).count();
    assert_eq!(white, 1);

    session.dispatch(Action::RemoveHighlight(cell));
    let diamond = session.model().color_settings.diamond;
    assert!(session.scene().shapes_in(Layer::Diamond).all(|s| s.fill == Some(diamond)));
}

#[test]
fn color_and_frame_actions_then_resets() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    let red = Color::from_rgb(200, 0, 0);
    session.dispatch(Action::SetColor(ColorRole::Background, red));
    session.dispatch(Action::SetFrameColor(FrameLayer::Decorative2, red));
    session.dispatch(Action::SetFrameSize(FrameLayer::Structural, 25));
    session.dispatch(Action::AddHighlight(GridPos::new(0, 0), red));
    assert_eq!(session.model().color_settings.background, red);
    assert_eq!(session.model().frame_size_settings.structural_layer_width, 25);

    session.dispatch(Action::Reset(ResetTarget::Colors));
    assert_ne!(session.model().color_settings.background, red);
    assert!(session.model().highlights.is_empty());
    assert_eq!(session.model().frame_color_settings.decorative_layer2, red);

    session.dispatch(Action::Reset(ResetTarget::Frame));
    assert_eq!(session.model().frame_size_settings.structural_layer_width, 15);
    assert_ne!(session.model().frame_color_settings.decorative_layer2, red);
}

#[test]
fn startup_reopens_cached_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tulips.dmnds");
    {
        let mut first = session_in(&dir);
        first.dispatch(Action::SetGridSize { columns: 3, rows: 3 });
        assert!(first.save_as(&path));
    }
    let mut second = session_in(&dir);
    second.startup(None);
    assert_eq!(second.model().active_file_path.as_deref(), Some(path.as_path()));
    assert_eq!(second.model().size_settings.grid_columns, 3);
}

#[test]
fn startup_ignores_stale_cache_and_prefers_argument() {
    let dir = TempDir::new().unwrap();
    let cache = PathCache::new(dir.path().join("last_file.json"));
    cache.write(&dir.path().join("gone.dmnds"));

    let mut session = session_in(&dir);
    session.startup(None);
    assert!(session.model().active_file_path.is_none());

    let explicit = dir.path().join("explicit.dmnds");
    assert!(session.save_as(&explicit));
    let mut other = session_in(&dir);
    other.startup(Some(&explicit));
    assert_eq!(other.model().active_file_path.as_deref(), Some(explicit.as_path()));
}

#[test]
fn export_uses_current_scene() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.dispatch(Action::SetDisplay(DisplayFlag::OnlyPattern, true));
    let expected = (session.scene().width, session.scene().height);
    let out = dir.path().join("pattern.png");
    let opts = diamond_render_skia::RenderOptions { draw_labels: false, ..Default::default() };
    assert!(session.export_png(&out, &opts));
    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), expected);
}

#[test]
fn pick_highlights_cell_under_point() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    let origin = session.scene().pattern_rect.top_left();
    let at = diamond_core::Point::new(origin.x + 61.0, origin.y + 150.0);
    session.dispatch(Action::PickCell { at, color: Palette::WHITE });
    assert_eq!(session.model().highlights.resolve().get(&GridPos::new(1, 1)), Some(&Palette::WHITE));

    let rev = session.revision();
    session.dispatch(Action::PickCell { at: diamond_core::Point::new(0.0, 0.0), color: Palette::WHITE });
    assert_eq!(session.revision(), rev);
    assert_eq!(session.model().highlights.len(), 1);
}

#[test]
fn oversized_size_edits_are_dropped() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    let sizes = session.model().size_settings;
    let rev = session.revision();

    session.dispatch(Action::SetPaintingMargin(3_000_000_000));
    session.dispatch(Action::SetGridSize { columns: MAX_GRID_CELLS + 1, rows: 4 });
    session.dispatch(Action::SetDiamondSize { width: MAX_LENGTH_MM + 1, height: 100 });
    assert_eq!(session.model().size_settings, sizes);
    assert_eq!(session.revision(), rev);

    session.dispatch(Action::SetMountingRimSize(MAX_LENGTH_MM));
    assert_eq!(session.model().size_settings.mounting_rim_size, MAX_LENGTH_MM);
    assert_eq!(session.revision(), rev + 1);
}
