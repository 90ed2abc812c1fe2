// File: crates/diamond-core/src/model.rs
// Summary: ApplicationModel: the single mutable state of an editing session.

use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::highlight::HighlightStore;
use crate::scene::SceneInput;
use crate::settings::{ColorSettings, DisplaySettings, FrameColorSettings, FrameSizeSettings, SizeSettings};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationModel {
    pub active_file_path: Option<PathBuf>,
    pub size_settings: SizeSettings,
    pub color_settings: ColorSettings,
    pub display_settings: DisplaySettings,
    pub highlights: HighlightStore,
    pub frame_size_settings: FrameSizeSettings,
    pub frame_color_settings: FrameColorSettings,
}

impl ApplicationModel {
    pub fn new() -> Self { Self::default() }

    /// File stem of the active file.
    pub fn active_file_name(&self) -> Option<&str> {
        self.active_file_path.as_deref()?.file_stem()?.to_str()
    }

    /// Directory holding the active file.
    pub fn active_file_location(&self) -> Option<&Path> {
        self.active_file_path.as_deref()?.parent().filter(|p| !p.as_os_str().is_empty())
    }

    pub fn reset_sizes(&mut self) { self.size_settings = SizeSettings::default(); }

    /// Restore default colors and drop every highlight.
    pub fn reset_colors(&mut self) {
        self.color_settings = ColorSettings::default();
        self.highlights.clear();
    }

    pub fn reset_display(&mut self) { self.display_settings = DisplaySettings::default(); }

    pub fn reset_highlights(&mut self) { self.highlights.clear(); }

    pub fn reset_frame(&mut self) {
        self.frame_size_settings = FrameSizeSettings::default();
        self.frame_color_settings = FrameColorSettings::default();
    }

    pub fn to_document(&self) -> Document {
        Document {
            size_settings: self.size_settings,
            color_settings: self.color_settings,
            display_settings: self.display_settings,
            highlights: self.highlights.clone(),
            frame_size_settings: self.frame_size_settings,
            frame_color_settings: self.frame_color_settings,
        }
    }

    /// Replace every settings record; the active path is left to the caller.
    pub fn apply_document(&mut self, doc: Document) {
        self.size_settings = doc.size_settings.with_clamped_offsets();
        self.color_settings = doc.color_settings;
        self.display_settings = doc.display_settings;
        self.highlights = doc.highlights;
        self.frame_size_settings = doc.frame_size_settings;
        self.frame_color_settings = doc.frame_color_settings;
    }

    pub fn scene_input(&self) -> SceneInput<'_> {
        SceneInput {
            size: &self.size_settings,
            colors: &self.color_settings,
            display: &self.display_settings,
            highlights: &self.highlights,
            frame_size: &self.frame_size_settings,
            frame_colors: &self.frame_color_settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::highlight::GridPos;

    #[test]
    fn file_name_and_location() {
        let mut m = ApplicationModel::new();
        assert_eq!(m.active_file_name(), None);
        m.active_file_path = Some(PathBuf::from("/home/me/art/tulips.dmnds"));
        assert_eq!(m.active_file_name(), Some("tulips"));
        assert_eq!(m.active_file_location(), Some(Path::new("/home/me/art")));
    }

    #[test]
    fn reset_colors_clears_highlights() {
        let mut m = ApplicationModel::new();
        m.color_settings.diamond = Palette::WHITE;
        m.highlights.add(GridPos::new(0, 0), Palette::DEBUG);
        m.reset_colors();
        assert_eq!(m.color_settings, ColorSettings::default());
        assert!(m.highlights.is_empty());
    }

    #[test]
    fn document_round_trips_through_model() {
        let mut m = ApplicationModel::new();
        m.size_settings.grid_rows = 7;
        m.highlights.add(GridPos::new(3, 1), Palette::LIGHTEST);
        let doc = m.to_document();
        let mut other = ApplicationModel::new();
        other.apply_document(doc.clone());
        assert_eq!(other.to_document(), doc);
    }
}
