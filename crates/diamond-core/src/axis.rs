// File: crates/diamond-core/src/axis.rs
// Summary: Axis-scale tick model: per-cell diamond ticks, rim/margin boundary ticks, end ticks.

use crate::settings::{DisplaySettings, SizeSettings};

/// What a tick marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    /// Center of a diamond column/row.
    Diamond,
    /// Mounting rim boundary (canvas edge side).
    Mount,
    /// Pattern boundary, after margin and rim.
    Rim,
    /// Start/end of the scale.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    /// Distance from the scale origin.
    pub position: f64,
    pub kind: TickKind,
}

impl AxisTick {
    pub const fn new(position: f64, kind: TickKind) -> Self { Self { position, kind } }

    pub fn label(&self) -> String {
        let value = format_position(self.position);
        match self.kind {
            TickKind::Diamond => format!("[D] {value}"),
            TickKind::Mount => format!("[M] {value}"),
            TickKind::Rim => format!("[R] {value}"),
            TickKind::End => value,
        }
    }
}

/// At most one decimal, trailing zero dropped.
pub fn format_position(v: f64) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 { format!("{rounded:.0}") } else { format!("{rounded:.1}") }
}

/// Tick positions along each axis plus the scale lengths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    pub horizontal: Vec<AxisTick>,
    pub vertical: Vec<AxisTick>,
    pub horizontal_length: f64,
    pub vertical_length: f64,
}

/// Scale styling in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleStyle {
    pub stroke_width: f64,
    pub font_size: f64,
    pub tick_size: f64,
    pub end_tick_size: f64,
    pub label_margin: f64,
}

impl Default for ScaleStyle {
    fn default() -> Self {
        Self { stroke_width: 2.0, font_size: 12.0, tick_size: 4.0, end_tick_size: 8.0, label_margin: 4.0 }
    }
}

impl ScaleStyle {
    pub fn tick_length(&self, kind: TickKind) -> f64 {
        if kind == TickKind::End { self.end_tick_size } else { self.tick_size }
    }
}

/// Diamond-center positions along one axis, measured from `start`.
fn cell_centers(start: f64, count: u32, dim: u32) -> impl Iterator<Item = f64> {
    let d = f64::from(dim);
    (0..count).map(move |i| start + d * 0.5 + d * f64::from(i))
}

fn axis(length: f64, start: f64, count: u32, dim: u32, rim: f64, total_margin: f64, boundaries: bool) -> Vec<AxisTick> {
    let mut ticks: Vec<AxisTick> = cell_centers(start, count, dim)
        .map(|p| AxisTick::new(p, TickKind::Diamond))
        .collect();
    if boundaries {
        ticks.push(AxisTick::new(rim, TickKind::Mount));
        ticks.push(AxisTick::new(total_margin, TickKind::Rim));
        ticks.push(AxisTick::new(length - total_margin, TickKind::Rim));
        ticks.push(AxisTick::new(length - rim, TickKind::Mount));
    }
    ticks.push(AxisTick::new(0.0, TickKind::End));
    ticks.push(AxisTick::new(length, TickKind::End));
    ticks
}

/// One tick per column/row at the cell center; outside pattern-only mode, four
/// boundary ticks per axis as well. Positions are relative to the painting
/// origin, or to the pattern origin in pattern-only mode.
pub fn compute_axis_ticks(size: &SizeSettings, display: &DisplaySettings) -> AxisTicks {
    let rim = f64::from(size.mounting_rim_size);
    let total = size.total_margin() as f64;
    let (start_x, start_y, extent) = if display.only_pattern {
        (f64::from(size.offset_x), f64::from(size.offset_y), size.pattern_size())
    } else {
        (total + f64::from(size.offset_x), total + f64::from(size.offset_y), size.painting_size())
    };
    let boundaries = !display.only_pattern;

    AxisTicks {
        horizontal: axis(extent.width, start_x, size.grid_columns, size.diamond_width, rim, total, boundaries),
        vertical: axis(extent.height, start_y, size.grid_rows, size.diamond_height, rim, total, boundaries),
        horizontal_length: extent.width,
        vertical_length: extent.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(ticks: &[AxisTick], kind: TickKind) -> Vec<f64> {
        ticks.iter().filter(|t| t.kind == kind).map(|t| t.position).collect()
    }

    #[test]
    fn whole_painting_ticks() {
        let s = SizeSettings::default();
        let t = compute_axis_ticks(&s, &DisplaySettings::default());
        let d = positions(&t.horizontal, TickKind::Diamond);
        assert_eq!(d.len(), 10);
        assert_eq!(d[0], 80.0);
        assert_eq!(d[9], 80.0 + 9.0 * 60.0);
        assert_eq!(positions(&t.horizontal, TickKind::Mount), vec![30.0, 670.0]);
        assert_eq!(positions(&t.horizontal, TickKind::Rim), vec![50.0, 650.0]);
        assert_eq!(positions(&t.vertical, TickKind::Rim), vec![50.0, 450.0]);
        assert_eq!(positions(&t.vertical, TickKind::End), vec![0.0, 500.0]);
        assert_eq!(t.horizontal_length, 700.0);
    }

    #[test]
    fn pattern_only_shifts_origin_and_drops_boundaries() {
        let s = SizeSettings { offset_x: 10, ..SizeSettings::default() };
        let display = DisplaySettings { only_pattern: true, ..DisplaySettings::default() };
        let t = compute_axis_ticks(&s, &display);
        assert_eq!(positions(&t.horizontal, TickKind::Diamond)[0], 40.0);
        assert!(positions(&t.horizontal, TickKind::Mount).is_empty());
        assert!(positions(&t.vertical, TickKind::Rim).is_empty());
        assert_eq!(t.vertical.len(), 4 + 2);
        assert_eq!(t.horizontal_length, 600.0);
    }

    #[test]
    fn labels() {
        assert_eq!(AxisTick::new(150.0, TickKind::Diamond).label(), "[D] 150");
        assert_eq!(AxisTick::new(30.0, TickKind::Mount).label(), "[M] 30");
        assert_eq!(AxisTick::new(12.25, TickKind::End).label(), "12.3");
        assert_eq!(format_position(700.0), "700");
    }
}
