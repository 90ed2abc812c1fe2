// File: crates/diamond-core/src/layout.rs
// Summary: Pure placement of the painting: origin/canvas extent, mounting rim, painted background, diamond grid.
// Notes:
// - Every function here is deterministic and side-effect free.
// - Diamonds outside the pattern are still produced; the renderer clips them.

use std::collections::HashMap;

use crate::axis::ScaleStyle;
use crate::color::Color;
use crate::frame::FramePerimeterRule;
use crate::geometry::{Point, Polygon, Rect, Size};
use crate::highlight::GridPos;
use crate::settings::{DisplaySettings, SizeSettings};
use crate::types::{Insets, INFO_BAR_THICKNESS};

/// Canvas-level spacing and styling knobs for scene construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Space between the canvas edge and the scale strip.
    pub canvas_margin: Insets,
    /// Space between the scale strip (or frame) and the painting.
    pub painting_margin: Insets,
    pub info_bar: f64,
    pub frame_rule: FramePerimeterRule,
    pub scale: ScaleStyle,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas_margin: Insets::default(),
            painting_margin: Insets::uniform(10.0),
            info_bar: INFO_BAR_THICKNESS,
            frame_rule: FramePerimeterRule::default(),
            scale: ScaleStyle::default(),
        }
    }
}

/// Extent of the region being drawn: the whole painting, or just the pattern.
pub fn visible_region_size(size: &SizeSettings, display: &DisplaySettings) -> Size {
    if display.only_pattern { size.pattern_size() } else { size.painting_size() }
}

/// Canvas pixel extent needed to hold `region` plus margins, scale strip and frame.
pub fn compute_canvas_size(region: Size, opts: &LayoutOptions, frame_outset: f64) -> Size {
    Size::new(
        region.width + opts.canvas_margin.hsum() + opts.painting_margin.hsum() + opts.info_bar + 2.0 * frame_outset,
        region.height + opts.canvas_margin.vsum() + opts.painting_margin.vsum() + opts.info_bar + 2.0 * frame_outset,
    )
}

/// Top-left corner of the painting inside a canvas of `canvas` size.
/// Anchored after the margins and scale strip; leftover space is split evenly.
pub fn compute_painting_origin(canvas: Size, region: Size, opts: &LayoutOptions, frame_outset: f64) -> Point {
    let needed = compute_canvas_size(region, opts, frame_outset);
    let spare_x = ((canvas.width - needed.width) * 0.5).max(0.0);
    let spare_y = ((canvas.height - needed.height) * 0.5).max(0.0);
    Point::new(
        opts.canvas_margin.left + opts.info_bar + opts.painting_margin.left + frame_outset + spare_x,
        opts.canvas_margin.top + opts.info_bar + opts.painting_margin.top + frame_outset + spare_y,
    )
}

/// Rim band as one 11-point outline: outer boundary, then the hole traced back.
/// A rim wider than half the painting yields a self-intersecting outline; not guarded.
pub fn compute_mounting_rim_polygon(origin: Point, size: &SizeSettings) -> Polygon {
    let p = size.painting_size();
    let (w, h) = (p.width, p.height);
    let r = f64::from(size.mounting_rim_size);
    Polygon::at(
        &[
            (0.0, 0.0),
            (0.0, h),
            (w, h),
            (w, 0.0),
            (r, 0.0),
            (r, r),
            (w - r, r),
            (w - r, h - r),
            (r, h - r),
            (r, 0.0),
            (0.0, 0.0),
        ],
        origin,
    )
}

/// Inner edge of the mounting rim.
pub fn compute_mounting_rim_outline(origin: Point, size: &SizeSettings) -> Rect {
    let r = f64::from(size.mounting_rim_size);
    Rect::from_origin_size(origin.offset(r), size.painting_size().grow(-2.0 * r))
}

/// Painted background; also the clip rectangle of the diamond grid.
pub fn compute_pattern_rect(origin: Point, size: &SizeSettings) -> Rect {
    Rect::from_origin_size(origin.offset(size.total_margin() as f64), size.pattern_size())
}

/// One rhombus of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiamondCell {
    pub position: GridPos,
    pub center: Point,
    pub half_width: f64,
    pub half_height: f64,
    pub color: Color,
}

impl DiamondCell {
    /// Vertices clockwise from the top.
    pub fn points(&self) -> [Point; 4] {
        let c = self.center;
        [
            Point::new(c.x, c.y - self.half_height),
            Point::new(c.x + self.half_width, c.y),
            Point::new(c.x, c.y + self.half_height),
            Point::new(c.x - self.half_width, c.y),
        ]
    }

    pub fn polygon(&self) -> Polygon { Polygon::new(self.points().to_vec()) }
}

/// Diamonds for rows `-1..=rows` and columns `-1..=cols`, row-major.
/// Color is the override at `(row, col)` when present, else `default_color`.
pub fn compute_diamond_grid(
    pattern_origin: Point,
    size: &SizeSettings,
    overrides: &HashMap<GridPos, Color>,
    default_color: Color,
) -> Vec<DiamondCell> {
    let w = f64::from(size.diamond_width);
    let h = f64::from(size.diamond_height);
    let rows = size.grid_rows as i32;
    let cols = size.grid_columns as i32;
    let base = pattern_origin + size.offset();

    let mut cells = Vec::with_capacity(((rows + 2) * (cols + 2)) as usize);
    for row in -1..=rows {
        for col in -1..=cols {
            let position = GridPos::new(row, col);
            let color = overrides.get(&position).copied().unwrap_or(default_color);
            cells.push(DiamondCell {
                position,
                center: Point::new(
                    base.x + (f64::from(col) + 0.5) * w,
                    base.y + (f64::from(row) + 0.5) * h,
                ),
                half_width: w * 0.5,
                half_height: h * 0.5,
                color,
            });
        }
    }
    cells
}

/// Grid cell whose rhombus contains a canvas point, accounting for the pattern offset.
/// The pattern clip is half-open: its right and bottom edges belong to nothing.
/// Points in the triangular gaps between rhombi return `None`.
pub fn hit_test_cell(pattern_origin: Point, size: &SizeSettings, p: Point) -> Option<GridPos> {
    let clip = Rect::from_origin_size(pattern_origin, size.pattern_size());
    let inside = p.x >= clip.left && p.x < clip.right && p.y >= clip.top && p.y < clip.bottom;
    if size.diamond_width == 0 || size.diamond_height == 0 || !inside {
        return None;
    }
    let (w, h) = (f64::from(size.diamond_width), f64::from(size.diamond_height));
    let local = p - pattern_origin - size.offset();
    let col = (local.x / w).floor();
    let row = (local.y / h).floor();
    let dx = (local.x - (col + 0.5) * w).abs() / (0.5 * w);
    let dy = (local.y - (row + 0.5) * h).abs() / (0.5 * h);
    (dx + dy <= 1.0).then(|| GridPos::new(row as i32, col as i32))
}
