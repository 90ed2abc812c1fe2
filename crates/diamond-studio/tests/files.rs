// File: crates/diamond-studio/tests/files.rs
// Purpose: FileManager save/load/export behavior, notifications and the path cache.

use std::cell::RefCell;
use std::rc::Rc;

use diamond_core::{build_scene, ApplicationModel, Document, GridPos, LayoutOptions, Palette};
use diamond_render_skia::RenderOptions;
use diamond_studio::{FileManager, Notification, NotificationCenter, PathCache, SharedNotifications};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    notes: SharedNotifications,
    seen: Rc<RefCell<Vec<Notification>>>,
    files: FileManager,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let notes = NotificationCenter::shared();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    notes.borrow_mut().subscribe(move |n| sink.borrow_mut().push(n.clone()));
    let cache = PathCache::new(dir.path().join("cache/last_file.json"));
    let files = FileManager::new(Rc::clone(&notes), Some(cache)).with_default_dir(dir.path().join("Diamonds"));
    Fixture { dir, notes, seen, files }
}

#[test]
fn save_as_sets_active_path_and_cache() {
    let fx = fixture();
    let path = fx.dir.path().join("art.dmnds");
    let mut model = ApplicationModel::new();

    assert!(fx.files.save_as(&mut model, &path));
    assert_eq!(model.active_file_path.as_deref(), Some(path.as_path()));
    assert_eq!(fx.files.cache().and_then(|c| c.read()), Some(path.clone()));
    assert_eq!(fx.seen.borrow().last(), Some(&Notification::Saved("art.dmnds".into())));
    assert_eq!(fx.notes.borrow().banner().map(|n| n.to_string()), Some("Saved art.dmnds".to_string()));
}

#[test]
fn failed_save_keeps_previous_active_path() {
    let fx = fixture();
    let good = fx.dir.path().join("good.dmnds");
    let mut model = ApplicationModel::new();
    assert!(fx.files.save_as(&mut model, &good));

    // a regular file where a directory is expected
    let blocker = fx.dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let bad = blocker.join("art.dmnds");
    assert!(!fx.files.save_as(&mut model, &bad));
    assert_eq!(model.active_file_path.as_deref(), Some(good.as_path()));
    assert_eq!(fx.seen.borrow().last(), Some(&Notification::SaveFailed("art.dmnds".into())));
}

#[test]
fn failed_load_leaves_model_unchanged() {
    let fx = fixture();
    let mut model = ApplicationModel::new();
    model.size_settings.grid_rows = 9;
    model.highlights.add(GridPos::new(1, 1), Palette::WHITE);
    let before = model.clone();

    let missing = fx.dir.path().join("missing.dmnds");
    assert!(!fx.files.load(&mut model, &missing));
    let garbage = fx.dir.path().join("garbage.dmnds");
    std::fs::write(&garbage, "{ not a design").unwrap();
    assert!(!fx.files.load(&mut model, &garbage));
    let huge = fx.dir.path().join("huge.dmnds");
    let mut oversized = Document::default();
    oversized.size_settings.painting_margin = 3_000_000_000;
    oversized.save(&huge).unwrap();
    assert!(!fx.files.load(&mut model, &huge));

    assert_eq!(model, before);
    let seen = fx.seen.borrow();
    assert_eq!(seen.as_slice(), &[
        Notification::LoadFailed("missing.dmnds".into()),
        Notification::LoadFailed("garbage.dmnds".into()),
        Notification::LoadFailed("huge.dmnds".into()),
    ]);
}

#[test]
fn load_replaces_settings_and_activates_file() {
    let fx = fixture();
    let path = fx.dir.path().join("saved.dmnds");
    let mut original = ApplicationModel::new();
    original.color_settings.diamond = Palette::LIGHT;
    original.highlights.add(GridPos::new(0, 3), Palette::DARKEST);
    assert!(fx.files.save_as(&mut original, &path));

    let mut fresh = ApplicationModel::new();
    assert!(fx.files.load(&mut fresh, &path));
    assert_eq!(fresh, original);
    assert_eq!(fx.seen.borrow().last(), Some(&Notification::Loaded("saved.dmnds".into())));
}

#[test]
fn quick_save_without_active_file_uses_default_location() {
    let fx = fixture();
    let mut model = ApplicationModel::new();
    assert!(fx.files.quick_save(&mut model));
    let expected = fx.dir.path().join("Diamonds/diamonds.dmnds");
    assert!(expected.exists());
    assert_eq!(model.active_file_path, Some(expected));
}

#[test]
fn quick_save_falls_back_when_active_file_unwritable() {
    let fx = fixture();
    let blocker = fx.dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let mut model = ApplicationModel::new();
    model.active_file_path = Some(blocker.join("art.dmnds"));

    assert!(fx.files.quick_save(&mut model));
    assert_eq!(model.active_file_path, Some(fx.files.default_save_path()));
    let seen = fx.seen.borrow();
    assert_eq!(seen[0], Notification::SaveFailed("art.dmnds".into()));
    assert_eq!(seen[1], Notification::Saved("diamonds.dmnds".into()));
}

#[test]
fn export_writes_png() {
    let fx = fixture();
    let model = ApplicationModel::new();
    let scene = build_scene(&model.scene_input(), &LayoutOptions::default());
    let out = fx.dir.path().join("out/design.png");
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    assert!(fx.files.export_png(&scene, &opts, &out));
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
    assert_eq!(fx.seen.borrow().last(), Some(&Notification::Exported("design.png".into())));
}
