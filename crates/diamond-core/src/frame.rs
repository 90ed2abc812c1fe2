// File: crates/diamond-core/src/frame.rs
// Summary: Decorative frame layout: outer perimeter, structural border bars, mitred decorative layers.
// Notes:
// - Decorative layer 1 lies just inside the perimeter; layer 2 is nested outward around it.
// - The exploded view pushes every piece out along its side normal, deeper layers further.

use crate::geometry::{Point, Polygon, Rect};
use crate::settings::{FrameSizeSettings, SizeSettings};
use crate::types::EXPLODE_GAP;

/// How far the outer perimeter sits outside the painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FramePerimeterRule {
    /// `structural + wiggle_room`: the structural border clears the painting.
    #[default]
    StructuralClearance,
    /// `decorative1 - mounting_rim`: decorative layer 1 covers the mounting rim.
    DecorativeOverlap,
}

impl FramePerimeterRule {
    pub fn outset(self, size: &SizeSettings, frame: &FrameSizeSettings) -> f64 {
        match self {
            Self::StructuralClearance => f64::from(frame.structural_layer_width) + f64::from(frame.wiggle_room),
            Self::DecorativeOverlap => {
                f64::from(frame.decorative_layer1_width) - f64::from(size.mounting_rim_size)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Unit outward normal in canvas coordinates (y down).
    fn normal(self) -> (f64, f64) {
        match self {
            Side::Top => (0.0, -1.0),
            Side::Bottom => (0.0, 1.0),
            Side::Left => (-1.0, 0.0),
            Side::Right => (1.0, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FramePiece {
    pub side: Side,
    pub polygon: Polygon,
}

impl FramePiece {
    fn exploded(self, distance: f64) -> Self {
        let (nx, ny) = self.side.normal();
        Self { side: self.side, polygon: self.polygon.translate(nx * distance, ny * distance) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameLayout {
    pub perimeter: Rect,
    pub structural: Vec<FramePiece>,
    pub decorative1: Vec<FramePiece>,
    pub decorative2: Vec<FramePiece>,
}

impl FrameLayout {
    /// Outermost extent of every piece (and the perimeter itself).
    pub fn bounds(&self) -> Rect {
        self.pieces()
            .filter_map(|p| p.polygon.bounds())
            .fold(self.perimeter, |acc, b| acc.union(&b))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &FramePiece> {
        self.structural.iter().chain(&self.decorative1).chain(&self.decorative2)
    }
}

fn rect_polygon(origin: Point, width: f64, height: f64) -> Polygon {
    Polygon::at(&[(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)], origin)
}

/// Border of four bars: top and bottom span the full width, left and right fit between.
fn structural_bars(perimeter: &Rect, s: f64) -> Vec<FramePiece> {
    let w = perimeter.width();
    let h = perimeter.height();
    vec![
        FramePiece { side: Side::Top, polygon: rect_polygon(perimeter.top_left(), w, s) },
        FramePiece { side: Side::Bottom, polygon: rect_polygon(perimeter.bottom_left().translate(0.0, -s), w, s) },
        FramePiece { side: Side::Left, polygon: rect_polygon(perimeter.top_left().translate(0.0, s), s, h - 2.0 * s) },
        FramePiece {
            side: Side::Right,
            polygon: rect_polygon(perimeter.top_right().translate(-s, s), s, h - 2.0 * s),
        },
    ]
}

/// Four trapezoids of thickness `t` inside `outer`, mitred at 45° in the corners.
pub fn mitred_layer(outer: &Rect, t: f64) -> Vec<FramePiece> {
    if t <= 0.0 {
        return Vec::new();
    }
    let w = outer.width();
    let h = outer.height();
    vec![
        FramePiece {
            side: Side::Top,
            polygon: Polygon::at(&[(0.0, 0.0), (w, 0.0), (w - t, t), (t, t)], outer.top_left()),
        },
        FramePiece {
            side: Side::Left,
            polygon: Polygon::at(&[(0.0, 0.0), (t, t), (t, h - t), (0.0, h)], outer.top_left()),
        },
        FramePiece {
            side: Side::Bottom,
            polygon: Polygon::at(&[(0.0, 0.0), (w, 0.0), (w - t, -t), (t, -t)], outer.bottom_left()),
        },
        FramePiece {
            side: Side::Right,
            polygon: Polygon::at(&[(0.0, 0.0), (-t, t), (-t, h - t), (0.0, h)], outer.top_right()),
        },
    ]
}

/// Frame geometry around a painting whose top-left corner is `painting_origin`.
pub fn compute_frame_layout(
    painting_origin: Point,
    size: &SizeSettings,
    frame: &FrameSizeSettings,
    rule: FramePerimeterRule,
    exploded: bool,
) -> FrameLayout {
    let painting = Rect::from_origin_size(painting_origin, size.painting_size());
    let perimeter = painting.inflate(rule.outset(size, frame));

    let t1 = f64::from(frame.decorative_layer1_width);
    let t2 = f64::from(frame.decorative_layer2_width);

    let mut layout = FrameLayout {
        perimeter,
        structural: structural_bars(&perimeter, f64::from(frame.structural_layer_width)),
        decorative1: mitred_layer(&perimeter, t1),
        decorative2: mitred_layer(&perimeter.inflate(t2), t2),
    };

    if exploded {
        let explode = |pieces: Vec<FramePiece>, depth: f64| {
            pieces.into_iter().map(|p| p.exploded(EXPLODE_GAP * depth)).collect::<Vec<_>>()
        };
        layout.structural = explode(layout.structural, 1.0);
        layout.decorative1 = explode(layout.decorative1, 2.0);
        layout.decorative2 = explode(layout.decorative2, 3.0);
    }
    layout
}

/// How far the frame reaches outside the painting on each side (never negative).
pub fn frame_outset(size: &SizeSettings, frame: &FrameSizeSettings, rule: FramePerimeterRule, exploded: bool) -> f64 {
    let layout = compute_frame_layout(Point::default(), size, frame, rule, exploded);
    let b = layout.bounds();
    let p = size.painting_size();
    (-b.left).max(-b.top).max(b.right - p.width).max(b.bottom - p.height).max(0.0)
}
