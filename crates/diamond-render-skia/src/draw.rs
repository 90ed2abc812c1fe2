// File: crates/diamond-render-skia/src/draw.rs
// Summary: Paints individual scene shapes onto a Skia canvas.

use diamond_core::{Color, Geometry, Point, Polygon, Rect, Shape, Stroke, TextAlign, TextRun};
use skia_safe as skia;

pub(crate) fn sk_color(c: Color) -> skia::Color { skia::Color::from_argb(c.a, c.r, c.g, c.b) }

fn sk_point(p: Point) -> skia::Point { skia::Point::new(p.x as f32, p.y as f32) }

fn sk_rect(r: &Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(c));
    paint
}

fn stroke_paint(s: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width as f32);
    paint.set_color(sk_color(s.color));
    paint
}

fn polygon_path(poly: &Polygon) -> skia::Path {
    let mut path = skia::Path::new();
    // even-odd so the rim outline (outer edge + traced-back hole) leaves the inside open
    path.set_fill_type(skia::PathFillType::EvenOdd);
    let mut points = poly.points.iter();
    if let Some(first) = points.next() {
        path.move_to(sk_point(*first));
        for p in points {
            path.line_to(sk_point(*p));
        }
        path.close();
    }
    path
}

/// Draw one shape, honoring its clip. Text is drawn only when `font` is given.
pub(crate) fn draw_shape(canvas: &skia::Canvas, shape: &Shape, font: Option<&skia::Font>) {
    if let Some(clip) = &shape.clip {
        canvas.save();
        canvas.clip_rect(sk_rect(clip), skia::ClipOp::Intersect, true);
    }

    match &shape.geometry {
        Geometry::Rect(r) => {
            let rect = sk_rect(r);
            if let Some(fill) = shape.fill {
                canvas.draw_rect(rect, &fill_paint(fill));
            }
            if let Some(stroke) = &shape.stroke {
                canvas.draw_rect(rect, &stroke_paint(stroke));
            }
        }
        Geometry::Polygon(poly) => {
            let path = polygon_path(poly);
            if let Some(fill) = shape.fill {
                canvas.draw_path(&path, &fill_paint(fill));
            }
            if let Some(stroke) = &shape.stroke {
                canvas.draw_path(&path, &stroke_paint(stroke));
            }
        }
        Geometry::Line(a, b) => {
            if let Some(stroke) = &shape.stroke {
                canvas.draw_line(sk_point(*a), sk_point(*b), &stroke_paint(stroke));
            }
        }
        Geometry::Text(run) => {
            if let (Some(font), Some(fill)) = (font, shape.fill) {
                draw_text(canvas, run, font, fill);
            }
        }
    }

    if shape.clip.is_some() {
        canvas.restore();
    }
}

fn draw_text(canvas: &skia::Canvas, run: &TextRun, base: &skia::Font, color: Color) {
    let font = base.with_size(run.size as f32).unwrap_or_else(|| base.clone());
    let paint = fill_paint(color);
    let (advance, _) = font.measure_str(&run.text, Some(&paint));
    let x = match run.align {
        TextAlign::Start => run.anchor.x as f32,
        TextAlign::Center => run.anchor.x as f32 - advance * 0.5,
        TextAlign::End => run.anchor.x as f32 - advance,
    };
    canvas.draw_str(&run.text, (x, run.anchor.y as f32), &font, &paint);
}
