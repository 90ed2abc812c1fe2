// File: crates/diamond-core/src/types.rs
// Summary: Shared types and constants (canvas paddings, file naming, frame/rim styling).

/// Height of the axis-scale strip above and left of the painting, in pixels.
pub const INFO_BAR_THICKNESS: f64 = 50.0;
/// Alpha applied to the mounting rim fill so the canvas shows through.
pub const MOUNTING_RIM_ALPHA: u8 = 128;
/// Distance between neighbouring layers in the exploded frame view.
pub const EXPLODE_GAP: f64 = 20.0;
/// Font size of the frame perimeter labels.
pub const FRAME_LABEL_FONT_SIZE: f64 = 16.0;
/// Gap between the frame edge and its perimeter labels.
pub const FRAME_LABEL_MARGIN: f64 = 5.0;

/// Largest accepted diamond, margin or rim length, in millimetres.
pub const MAX_LENGTH_MM: u32 = 10_000;
/// Largest accepted row or column count.
pub const MAX_GRID_CELLS: u32 = 1_000;

/// Extension of saved design files (without the dot).
pub const FILE_EXTENSION: &str = "dmnds";
/// Suggested file stem when nothing is open yet.
pub const DEFAULT_FILE_NAME: &str = "diamonds";
/// Folder under the user's documents directory used as the default save location.
pub const DEFAULT_FOLDER_NAME: &str = "Diamonds";

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    /// Create new insets.
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: f64) -> Self { Self::new(v, v, v, v) }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // canvas margin: nothing on the right/bottom, the painting margin covers it
        Self::new(10.0, 0.0, 10.0, 0.0)
    }
}
