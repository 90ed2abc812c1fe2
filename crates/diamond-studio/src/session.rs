// File: crates/diamond-studio/src/session.rs
// Summary: Editing session: owns the model, applies actions, re-derives the scene on demand.
// Notes:
// - Every mutation bumps `revision`; the cached scene is rebuilt lazily when stale.
// - Offsets are validated against the diamond size on every size edit.
// - Size edits above the accepted limits are dropped without a revision bump.

use std::path::Path;
use std::str::FromStr;

use diamond_core::{
    build_scene, clamp_offset, hit_test_cell, ApplicationModel, Color, GridPos, LayoutOptions, Point, Scene,
};
use diamond_render_skia::RenderOptions;

use crate::files::FileManager;
use crate::notify::SharedNotifications;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRole {
    Background,
    Diamond,
    CanvasRim,
    MountingRim,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayFlag {
    ShowScales,
    OnlyPattern,
    ShowDebugLines,
    ShowFrame,
    ShowExplodedFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameLayer {
    Structural,
    Decorative1,
    Decorative2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ResetTarget {
    Sizes,
    Colors,
    Display,
    Frame,
    Highlights,
}

/// Names accepted on the command line, matching the persisted field names.
fn parse_name<T: Copy>(s: &str, table: &[(&str, T)], what: &str) -> Result<T, String> {
    let key = s.trim().to_ascii_lowercase().replace('-', "_");
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, v)| *v)
        .ok_or_else(|| {
            let names: Vec<&str> = table.iter().map(|(n, _)| *n).collect();
            format!("unknown {what} '{s}' (expected one of: {})", names.join(", "))
        })
}

impl FromStr for ColorRole {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(
            s,
            &[
                ("background", Self::Background),
                ("diamond", Self::Diamond),
                ("canvas_rim", Self::CanvasRim),
                ("mounting_rim", Self::MountingRim),
            ],
            "color role",
        )
    }
}

impl FromStr for DisplayFlag {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(
            s,
            &[
                ("show_scales", Self::ShowScales),
                ("only_pattern", Self::OnlyPattern),
                ("show_debug_lines", Self::ShowDebugLines),
                ("show_frame", Self::ShowFrame),
                ("show_exploded_frame", Self::ShowExplodedFrame),
            ],
            "display flag",
        )
    }
}

impl FromStr for FrameLayer {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(
            s,
            &[
                ("structural", Self::Structural),
                ("decorative1", Self::Decorative1),
                ("decorative2", Self::Decorative2),
            ],
            "frame layer",
        )
    }
}

/// One user edit.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetDiamondSize { width: u32, height: u32 },
    SetGridSize { columns: u32, rows: u32 },
    SetPaintingMargin(u32),
    SetMountingRimSize(u32),
    SetOffset { x: i32, y: i32 },
    SetColor(ColorRole, Color),
    SetDisplay(DisplayFlag, bool),
    SetFrameSize(FrameLayer, u32),
    SetWiggleRoom(u32),
    SetFrameColor(FrameLayer, Color),
    AddHighlight(GridPos, Color),
    /// Replace whatever is at the cell with a single highlight.
    AssignHighlight(GridPos, Color),
    RemoveHighlight(GridPos),
    /// Assign a highlight to the cell under a canvas point; no-op outside the pattern.
    PickCell { at: Point, color: Color },
    Reset(ResetTarget),
}

fn apply(model: &mut ApplicationModel, action: Action) {
    match action {
        Action::SetDiamondSize { width, height } => {
            let s = &mut model.size_settings;
            s.diamond_width = width;
            s.diamond_height = height;
            *s = s.with_clamped_offsets();
        }
        Action::SetGridSize { columns, rows } => {
            model.size_settings.grid_columns = columns;
            model.size_settings.grid_rows = rows;
        }
        Action::SetPaintingMargin(m) => model.size_settings.painting_margin = m,
        Action::SetMountingRimSize(r) => model.size_settings.mounting_rim_size = r,
        Action::SetOffset { x, y } => {
            let s = &mut model.size_settings;
            s.offset_x = clamp_offset(x, s.diamond_width);
            s.offset_y = clamp_offset(y, s.diamond_height);
        }
        Action::SetColor(role, c) => {
            let colors = &mut model.color_settings;
            match role {
                ColorRole::Background => colors.background = c,
                ColorRole::Diamond => colors.diamond = c,
                ColorRole::CanvasRim => colors.canvas_rim = c,
                ColorRole::MountingRim => colors.mounting_rim = c,
            }
        }
        Action::SetDisplay(flag, on) => {
            let d = &mut model.display_settings;
            match flag {
                DisplayFlag::ShowScales => d.show_scales = on,
                DisplayFlag::OnlyPattern => d.only_pattern = on,
                DisplayFlag::ShowDebugLines => d.show_debug_lines = on,
                DisplayFlag::ShowFrame => d.show_frame = on,
                DisplayFlag::ShowExplodedFrame => d.show_exploded_frame = on,
            }
        }
        Action::SetFrameSize(layer, w) => {
            let f = &mut model.frame_size_settings;
            match layer {
                FrameLayer::Structural => f.structural_layer_width = w,
                FrameLayer::Decorative1 => f.decorative_layer1_width = w,
                FrameLayer::Decorative2 => f.decorative_layer2_width = w,
            }
        }
        Action::SetWiggleRoom(w) => model.frame_size_settings.wiggle_room = w,
        Action::SetFrameColor(layer, c) => {
            let f = &mut model.frame_color_settings;
            match layer {
                FrameLayer::Structural => f.structural_layer = c,
                FrameLayer::Decorative1 => f.decorative_layer1 = c,
                FrameLayer::Decorative2 => f.decorative_layer2 = c,
            }
        }
        Action::AddHighlight(pos, c) => model.highlights.add(pos, c),
        Action::AssignHighlight(pos, c) => model.highlights.assign(pos, c),
        Action::RemoveHighlight(pos) => model.highlights.remove_at(pos),
        // needs the current scene; resolved in Session::dispatch
        Action::PickCell { .. } => {}
        Action::Reset(target) => match target {
            ResetTarget::Sizes => model.reset_sizes(),
            ResetTarget::Colors => model.reset_colors(),
            ResetTarget::Display => model.reset_display(),
            ResetTarget::Frame => model.reset_frame(),
            ResetTarget::Highlights => model.reset_highlights(),
        },
    }
}

fn cached_scene<'a>(
    slot: &'a mut Option<(u64, Scene)>,
    revision: u64,
    model: &ApplicationModel,
    layout: &LayoutOptions,
) -> &'a Scene {
    if slot.as_ref().is_some_and(|(r, _)| *r != revision) {
        *slot = None;
    }
    &slot.get_or_insert_with(|| (revision, build_scene(&model.scene_input(), layout))).1
}

pub struct Session {
    model: ApplicationModel,
    revision: u64,
    scene: Option<(u64, Scene)>,
    layout: LayoutOptions,
    files: FileManager,
    notifications: SharedNotifications,
}

impl Session {
    pub fn new(files: FileManager, notifications: SharedNotifications) -> Self {
        Self {
            model: ApplicationModel::new(),
            revision: 0,
            scene: None,
            layout: LayoutOptions::default(),
            files,
            notifications,
        }
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self.touch();
        self
    }

    pub fn model(&self) -> &ApplicationModel { &self.model }
    pub fn revision(&self) -> u64 { self.revision }
    pub fn files(&self) -> &FileManager { &self.files }
    pub fn notifications(&self) -> &SharedNotifications { &self.notifications }

    fn touch(&mut self) { self.revision += 1; }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let action = match action {
            Action::PickCell { at, color } => {
                let origin = self.scene().pattern_rect.top_left();
                match hit_test_cell(origin, &self.model.size_settings, at) {
                    Some(cell) => Action::AssignHighlight(cell, color),
                    None => return,
                }
            }
            other => other,
        };
        let sizes = self.model.size_settings;
        apply(&mut self.model, action);
        if let Some((field, value, max)) = self.model.size_settings.out_of_range() {
            tracing::warn!(field, value, max, "size edit rejected");
            self.model.size_settings = sizes;
            return;
        }
        self.touch();
    }

    /// Scene for the current revision, rebuilt only when the model changed.
    pub fn scene(&mut self) -> &Scene {
        cached_scene(&mut self.scene, self.revision, &self.model, &self.layout)
    }

    pub fn load(&mut self, path: &Path) -> bool {
        let ok = self.files.load(&mut self.model, path);
        if ok {
            self.touch();
        }
        ok
    }

    pub fn save_as(&mut self, path: &Path) -> bool { self.files.save_as(&mut self.model, path) }

    pub fn quick_save(&mut self) -> bool { self.files.quick_save(&mut self.model) }

    pub fn export_png(&mut self, path: &Path, opts: &RenderOptions) -> bool {
        let scene = cached_scene(&mut self.scene, self.revision, &self.model, &self.layout);
        self.files.export_png(scene, opts, path)
    }

    /// Open `arg` when given; otherwise reopen the cached last file if it still exists.
    pub fn startup(&mut self, arg: Option<&Path>) {
        if let Some(path) = arg {
            self.load(path);
            return;
        }
        let cached = self.files.cache().and_then(|c| c.read());
        match cached {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "reopening last file");
                self.load(&path);
            }
            Some(path) => tracing::debug!(path = %path.display(), "cached file no longer exists"),
            None => {}
        }
    }
}
