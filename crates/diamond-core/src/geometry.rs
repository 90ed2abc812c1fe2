// File: crates/diamond-core/src/geometry.rs
// Summary: Lightweight geometry helpers for millimetre/pixel math (points, sizes, rects, polygons).

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
    /// Offset both coordinates by the same amount.
    pub fn offset(self, d: f64) -> Self { Self::new(self.x + d, self.y + d) }
    pub fn translate(self, dx: f64, dy: f64) -> Self { Self::new(self.x + dx, self.y + dy) }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
    /// Grow both dimensions by `d` (use `2 * margin` for a symmetric border).
    pub fn grow(self, d: f64) -> Self { Self::new(self.width + d, self.height + d) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::from_ltrb(origin.x, origin.y, origin.x + size.width, origin.y + size.height)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn size(&self) -> Size { Size::new(self.width(), self.height()) }
    pub fn top_left(&self) -> Point { Point::new(self.left, self.top) }
    pub fn top_right(&self) -> Point { Point::new(self.right, self.top) }
    pub fn bottom_left(&self) -> Point { Point::new(self.left, self.bottom) }
    pub fn bottom_right(&self) -> Point { Point::new(self.right, self.bottom) }

    /// Grow outward by `d` on every side (negative `d` shrinks).
    pub fn inflate(&self, d: f64) -> Self {
        Self::from_ltrb(self.left - d, self.top - d, self.right + d, self.bottom + d)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::from_ltrb(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Self {
        Self::from_ltrb(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Closed polygon; the last point connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self { Self { points } }

    /// Translate a polygon authored in local coordinates to `origin`.
    pub fn at(local: &[(f64, f64)], origin: Point) -> Self {
        Self { points: local.iter().map(|&(x, y)| Point::new(origin.x + x, origin.y + y)).collect() }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self { points: self.points.iter().map(|p| p.translate(dx, dy)).collect() }
    }

    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let mut r = Rect::from_ltrb(first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            r.left = r.left.min(p.x);
            r.top = r.top.min(p.y);
            r.right = r.right.max(p.x);
            r.bottom = r.bottom.max(p.y);
        }
        Some(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_inflate_and_union() {
        let r = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        let g = r.inflate(5.0);
        assert_eq!(g, Rect::from_ltrb(5.0, 15.0, 115.0, 75.0));
        let u = r.union(&Rect::from_ltrb(0.0, 0.0, 1.0, 1.0));
        assert_eq!(u, Rect::from_ltrb(0.0, 0.0, 110.0, 70.0));
    }

    #[test]
    fn polygon_bounds() {
        let p = Polygon::at(&[(0.0, 0.0), (4.0, -2.0), (1.0, 3.0)], Point::new(1.0, 1.0));
        assert_eq!(p.bounds(), Some(Rect::from_ltrb(1.0, -1.0, 5.0, 4.0)));
        assert_eq!(Polygon::default().bounds(), None);
    }
}
