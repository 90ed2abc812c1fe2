// File: crates/diamond-studio/src/files.rs
// Summary: FileManager: load/save/export with user notifications; failures never escape as errors.

use std::path::{Path, PathBuf};

use diamond_core::document::{default_location, document_path};
use diamond_core::types::DEFAULT_FILE_NAME;
use diamond_core::{ApplicationModel, Document, Scene};
use diamond_render_skia::{RenderOptions, SkiaRenderer};

use crate::cache::PathCache;
use crate::notify::{display_name, Notification, SharedNotifications};

pub struct FileManager {
    notifications: SharedNotifications,
    cache: Option<PathCache>,
    default_dir: PathBuf,
    renderer: SkiaRenderer,
}

impl FileManager {
    pub fn new(notifications: SharedNotifications, cache: Option<PathCache>) -> Self {
        Self { notifications, cache, default_dir: default_location(), renderer: SkiaRenderer::new() }
    }

    /// Override the folder used when there is no active file.
    pub fn with_default_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_dir = dir.into();
        self
    }

    pub fn default_dir(&self) -> &Path { &self.default_dir }

    pub fn cache(&self) -> Option<&PathCache> { self.cache.as_ref() }

    /// Fallback save target: `<default dir>/diamonds.dmnds`.
    pub fn default_save_path(&self) -> PathBuf { document_path(&self.default_dir, DEFAULT_FILE_NAME) }

    fn notify(&self, n: Notification) {
        tracing::debug!("{n}");
        self.notifications.borrow_mut().post(n);
    }

    fn set_active(&self, model: &mut ApplicationModel, path: &Path) {
        model.active_file_path = Some(path.to_path_buf());
        if let Some(cache) = &self.cache {
            cache.write(path);
        }
    }

    /// Replace the model's settings with the document at `path`. Model untouched on failure.
    pub fn load(&self, model: &mut ApplicationModel, path: &Path) -> bool {
        match Document::load(path) {
            Ok(doc) => {
                model.apply_document(doc);
                self.set_active(model, path);
                self.notify(Notification::Loaded(display_name(path)));
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "load failed: {e}");
                self.notify(Notification::LoadFailed(display_name(path)));
                false
            }
        }
    }

    /// Write the model to `path`; the active path moves only on success.
    pub fn save_as(&self, model: &mut ApplicationModel, path: &Path) -> bool {
        match model.to_document().save(path) {
            Ok(()) => {
                self.set_active(model, path);
                self.notify(Notification::Saved(display_name(path)));
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "save failed: {e}");
                self.notify(Notification::SaveFailed(display_name(path)));
                false
            }
        }
    }

    /// Save to the active file, or to the default location when there is none
    /// or writing the active file fails.
    pub fn quick_save(&self, model: &mut ApplicationModel) -> bool {
        if let Some(active) = model.active_file_path.clone() {
            if self.save_as(model, &active) {
                return true;
            }
        }
        let fallback = self.default_save_path();
        self.save_as(model, &fallback)
    }

    pub fn export_png(&self, scene: &Scene, opts: &RenderOptions, path: &Path) -> bool {
        match self.renderer.render_to_png(scene, opts, path) {
            Ok(()) => {
                self.notify(Notification::Exported(display_name(path)));
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "export failed: {e:#}");
                self.notify(Notification::ExportFailed(display_name(path)));
                false
            }
        }
    }
}
