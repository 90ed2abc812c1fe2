// File: crates/diamond-core/src/settings.rs
// Summary: Immutable settings records (size, color, display, frame) and the offset validator.
// Notes:
// - All lengths are millimetres; the layout renders 1 mm as 1 px at scale 1.
// - Records are plain `Copy` values; edits replace the whole record.

use serde::{Deserialize, Serialize};

use crate::color::{Color, Palette};
use crate::geometry::{Point, Size};
use crate::types::{MAX_GRID_CELLS, MAX_LENGTH_MM};

/// Pattern and painting dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSettings {
    pub diamond_width: u32,
    pub diamond_height: u32,
    pub grid_columns: u32,
    pub grid_rows: u32,
    pub painting_margin: u32,
    pub mounting_rim_size: u32,
    #[serde(default)]
    pub offset_x: i32,
    #[serde(default)]
    pub offset_y: i32,
}

impl Default for SizeSettings {
    fn default() -> Self {
        Self {
            diamond_width: 60,
            diamond_height: 100,
            grid_columns: 10,
            grid_rows: 4,
            painting_margin: 20,
            mounting_rim_size: 30,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl SizeSettings {
    pub fn diamond_size(&self) -> Size {
        Size::new(f64::from(self.diamond_width), f64::from(self.diamond_height))
    }

    pub fn offset(&self) -> Point { Point::new(f64::from(self.offset_x), f64::from(self.offset_y)) }

    /// Margin plus mounting rim: distance from painting edge to pattern edge.
    pub fn total_margin(&self) -> u64 { u64::from(self.painting_margin) + u64::from(self.mounting_rim_size) }

    /// Integer pattern extent `(columns * width, rows * height)`.
    /// Computed in `u64` so any pair of `u32` inputs fits.
    pub fn pattern_dims(&self) -> (u64, u64) {
        (
            u64::from(self.grid_columns) * u64::from(self.diamond_width),
            u64::from(self.grid_rows) * u64::from(self.diamond_height),
        )
    }

    /// Integer painting extent: pattern plus margin and rim on both sides.
    pub fn painting_dims(&self) -> (u64, u64) {
        let (w, h) = self.pattern_dims();
        let m = 2 * self.total_margin();
        (w + m, h + m)
    }

    pub fn pattern_size(&self) -> Size {
        let (w, h) = self.pattern_dims();
        Size::new(w as f64, h as f64)
    }

    pub fn painting_size(&self) -> Size {
        let (w, h) = self.painting_dims();
        Size::new(w as f64, h as f64)
    }

    /// First field above its limit as `(name, value, max)`, if any.
    pub fn out_of_range(&self) -> Option<(&'static str, u32, u32)> {
        [
            ("diamond_width", self.diamond_width, MAX_LENGTH_MM),
            ("diamond_height", self.diamond_height, MAX_LENGTH_MM),
            ("grid_columns", self.grid_columns, MAX_GRID_CELLS),
            ("grid_rows", self.grid_rows, MAX_GRID_CELLS),
            ("painting_margin", self.painting_margin, MAX_LENGTH_MM),
            ("mounting_rim_size", self.mounting_rim_size, MAX_LENGTH_MM),
        ]
        .into_iter()
        .find(|&(_, value, max)| value > max)
    }

    /// Copy with both offsets run through [`clamp_offset`].
    pub fn with_clamped_offsets(self) -> Self {
        Self {
            offset_x: clamp_offset(self.offset_x, self.diamond_width),
            offset_y: clamp_offset(self.offset_y, self.diamond_height),
            ..self
        }
    }
}

/// Offsets must stay strictly inside one diamond; anything else resets to 0.
pub fn clamp_offset(offset: i32, dimension: u32) -> i32 {
    if offset.unsigned_abs() < dimension { offset } else { 0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    pub background: Color,
    pub diamond: Color,
    pub canvas_rim: Color,
    pub mounting_rim: Color,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: Palette::LIGHT,
            diamond: Palette::DARK,
            canvas_rim: Palette::WHITE,
            mounting_rim: Palette::DARKEST,
        }
    }
}

/// Independent display toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub show_scales: bool,
    /// Restrict rendering (and the scale origin) to the diamond pattern.
    pub only_pattern: bool,
    pub show_debug_lines: bool,
    pub show_frame: bool,
    pub show_exploded_frame: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_scales: true,
            only_pattern: false,
            show_debug_lines: false,
            show_frame: true,
            show_exploded_frame: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSizeSettings {
    pub structural_layer_width: u32,
    pub decorative_layer1_width: u32,
    pub decorative_layer2_width: u32,
    /// Clearance between the painting and the structural layer.
    #[serde(default)]
    pub wiggle_room: u32,
}

impl Default for FrameSizeSettings {
    fn default() -> Self {
        Self {
            structural_layer_width: 15,
            decorative_layer1_width: 30,
            decorative_layer2_width: 20,
            wiggle_room: 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameColorSettings {
    pub structural_layer: Color,
    pub decorative_layer1: Color,
    pub decorative_layer2: Color,
}

impl Default for FrameColorSettings {
    fn default() -> Self {
        Self {
            structural_layer: Palette::DARKEST,
            decorative_layer1: Palette::DARK,
            decorative_layer2: Palette::DARK,
        }
    }
}
