// File: crates/diamond-core/src/scene.rs
// Summary: Retained, renderer-agnostic scene: ordered shapes derived from a settings snapshot.
// Notes:
// - `build_scene` is the single entry point the session calls after every model change.
// - Paint order is the vector order; later shapes cover earlier ones.

use crate::axis::{compute_axis_ticks, AxisTick, ScaleStyle};
use crate::color::{Color, Palette};
use crate::frame::{compute_frame_layout, frame_outset, FrameLayout, FramePiece};
use crate::geometry::{Point, Polygon, Rect, Size};
use crate::highlight::HighlightStore;
use crate::layout::{
    compute_canvas_size, compute_diamond_grid, compute_mounting_rim_outline, compute_mounting_rim_polygon,
    compute_painting_origin, compute_pattern_rect, visible_region_size, LayoutOptions,
};
use crate::settings::{ColorSettings, DisplaySettings, FrameColorSettings, FrameSizeSettings, SizeSettings};
use crate::types::{FRAME_LABEL_FONT_SIZE, FRAME_LABEL_MARGIN, MOUNTING_RIM_ALPHA};

/// Read-only view of every settings record the layout consumes.
#[derive(Clone, Copy, Debug)]
pub struct SceneInput<'a> {
    pub size: &'a SizeSettings,
    pub colors: &'a ColorSettings,
    pub display: &'a DisplaySettings,
    pub highlights: &'a HighlightStore,
    pub frame_size: &'a FrameSizeSettings,
    pub frame_colors: &'a FrameColorSettings,
}

/// Which part of the picture a shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Canvas,
    Scale,
    MountingRim,
    Pattern,
    Diamond,
    FrameStructure,
    FrameDecoration1,
    FrameDecoration2,
    FrameLabel,
    Debug,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// Baseline anchor; `align` says which end of the text sits here.
    pub anchor: Point,
    pub text: String,
    pub size: f64,
    pub align: TextAlign,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Rect(Rect),
    Polygon(Polygon),
    Line(Point, Point),
    Text(TextRun),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self { Self { color, width } }
    pub const fn hairline(color: Color) -> Self { Self::new(color, 1.0) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub layer: Layer,
    pub geometry: Geometry,
    /// Fill color; for text this is the glyph color.
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub clip: Option<Rect>,
}

impl Shape {
    fn new(layer: Layer, geometry: Geometry) -> Self {
        Self { layer, geometry, fill: None, stroke: None, clip: None }
    }
    fn fill(mut self, c: Color) -> Self { self.fill = Some(c); self }
    fn stroke(mut self, s: Stroke) -> Self { self.stroke = Some(s); self }
    fn clip(mut self, r: Rect) -> Self { self.clip = Some(r); self }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Top-left of the painting (or pattern, in pattern-only mode).
    pub painting_origin: Point,
    /// Pattern clip rectangle in canvas coordinates.
    pub pattern_rect: Rect,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn shapes_in(&self, layer: Layer) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.layer == layer)
    }

    pub fn size(&self) -> Size { Size::new(f64::from(self.width), f64::from(self.height)) }
}

/// Canvas extent for the given settings, in whole pixels.
pub fn canvas_size(input: &SceneInput<'_>, opts: &LayoutOptions) -> Size {
    let region = visible_region_size(input.size, input.display);
    let size = compute_canvas_size(region, opts, effective_frame_outset(input, opts));
    Size::new(size.width.ceil(), size.height.ceil())
}

fn frame_visible(display: &DisplaySettings) -> bool { display.show_frame && !display.only_pattern }

/// Frame reach plus room for its perimeter labels.
fn effective_frame_outset(input: &SceneInput<'_>, opts: &LayoutOptions) -> f64 {
    if !frame_visible(input.display) {
        return 0.0;
    }
    let reach = frame_outset(input.size, input.frame_size, opts.frame_rule, input.display.show_exploded_frame);
    reach + FRAME_LABEL_FONT_SIZE + FRAME_LABEL_MARGIN
}

/// Derive every shape for one redraw.
pub fn build_scene(input: &SceneInput<'_>, opts: &LayoutOptions) -> Scene {
    let size = input.size;
    let display = input.display;
    let colors = input.colors;

    let canvas = canvas_size(input, opts);
    let region = visible_region_size(size, display);
    let origin = compute_painting_origin(canvas, region, opts, effective_frame_outset(input, opts));

    // Pattern-only treats the pattern's top-left as the painting origin.
    let pattern_rect = if display.only_pattern {
        Rect::from_origin_size(origin, size.pattern_size())
    } else {
        compute_pattern_rect(origin, size)
    };

    let mut shapes = Vec::new();

    if !display.only_pattern {
        shapes.push(
            Shape::new(Layer::Canvas, Geometry::Rect(Rect::from_origin_size(origin, size.painting_size())))
                .fill(colors.canvas_rim)
                .stroke(Stroke::hairline(colors.mounting_rim)),
        );
    }

    if display.show_scales {
        push_scales(&mut shapes, input, opts, origin);
    }

    if !display.only_pattern {
        shapes.push(
            Shape::new(Layer::MountingRim, Geometry::Polygon(compute_mounting_rim_polygon(origin, size)))
                .fill(colors.mounting_rim.with_alpha(MOUNTING_RIM_ALPHA)),
        );
        shapes.push(
            Shape::new(Layer::MountingRim, Geometry::Rect(compute_mounting_rim_outline(origin, size)))
                .stroke(Stroke::hairline(colors.mounting_rim)),
        );
    }

    shapes.push(Shape::new(Layer::Pattern, Geometry::Rect(pattern_rect)).fill(colors.background));

    let overrides = input.highlights.resolve();
    for cell in compute_diamond_grid(pattern_rect.top_left(), size, &overrides, colors.diamond) {
        shapes.push(Shape::new(Layer::Diamond, Geometry::Polygon(cell.polygon())).fill(cell.color).clip(pattern_rect));
    }

    if frame_visible(display) {
        let frame = compute_frame_layout(origin, size, input.frame_size, opts.frame_rule, display.show_exploded_frame);
        push_frame(&mut shapes, &frame, input.frame_colors);
        if display.show_debug_lines {
            shapes.push(Shape::new(Layer::Debug, Geometry::Rect(frame.perimeter)).stroke(Stroke::hairline(Palette::DEBUG)));
        }
    }

    if display.show_debug_lines {
        shapes.push(Shape::new(Layer::Debug, Geometry::Rect(pattern_rect)).stroke(Stroke::hairline(Palette::DEBUG)));
    }

    Scene {
        width: canvas.width as u32,
        height: canvas.height as u32,
        background: Palette::CANVAS,
        painting_origin: origin,
        pattern_rect,
        shapes,
    }
}

fn push_scales(shapes: &mut Vec<Shape>, input: &SceneInput<'_>, opts: &LayoutOptions, origin: Point) {
    let ticks = compute_axis_ticks(input.size, input.display);
    let style = &opts.scale;
    let pen = Stroke::new(Palette::SCALE, style.stroke_width);
    let top = opts.canvas_margin.top;
    let left = opts.canvas_margin.left;

    // horizontal scale runs along the top edge, ticks hang down
    let h0 = Point::new(origin.x, top);
    shapes.push(Shape::new(Layer::Scale, Geometry::Line(h0, h0.translate(ticks.horizontal_length, 0.0))).stroke(pen));
    for tick in &ticks.horizontal {
        let len = style.tick_length(tick.kind);
        let at = h0.translate(tick.position, 0.0);
        shapes.push(Shape::new(Layer::Scale, Geometry::Line(at, at.translate(0.0, len))).stroke(pen));
        shapes.push(scale_label(tick, at.translate(0.0, len + style.label_margin + style.font_size), TextAlign::Center, style));
    }

    // vertical scale runs along the left edge, ticks point right
    let v0 = Point::new(left, origin.y);
    shapes.push(Shape::new(Layer::Scale, Geometry::Line(v0, v0.translate(0.0, ticks.vertical_length))).stroke(pen));
    for tick in &ticks.vertical {
        let len = style.tick_length(tick.kind);
        let at = v0.translate(0.0, tick.position);
        shapes.push(Shape::new(Layer::Scale, Geometry::Line(at, at.translate(len, 0.0))).stroke(pen));
        shapes.push(scale_label(tick, at.translate(len + style.label_margin, style.font_size * 0.35), TextAlign::Start, style));
    }
}

fn scale_label(tick: &AxisTick, anchor: Point, align: TextAlign, style: &ScaleStyle) -> Shape {
    Shape::new(
        Layer::Scale,
        Geometry::Text(TextRun { anchor, text: tick.label(), size: style.font_size, align }),
    )
    .fill(Palette::SCALE)
}

fn push_frame(shapes: &mut Vec<Shape>, frame: &FrameLayout, colors: &FrameColorSettings) {
    for piece in &frame.structural {
        shapes.push(
            Shape::new(Layer::FrameStructure, Geometry::Polygon(piece.polygon.clone()))
                .stroke(Stroke::hairline(colors.structural_layer)),
        );
    }
    let decorate = |pieces: &[FramePiece], layer: Layer, color: Color| {
        pieces
            .iter()
            .map(move |p| {
                Shape::new(layer, Geometry::Polygon(p.polygon.clone()))
                    .fill(color)
                    .stroke(Stroke::hairline(color.darken()))
            })
            .collect::<Vec<_>>()
    };
    shapes.extend(decorate(&frame.decorative1, Layer::FrameDecoration1, colors.decorative_layer1));
    shapes.extend(decorate(&frame.decorative2, Layer::FrameDecoration2, colors.decorative_layer2));

    // perimeter size labels
    let p = frame.perimeter;
    let reach = frame.bounds();
    let label_color = colors.structural_layer.darken();
    let width_label = TextRun {
        anchor: Point::new(p.left + p.width() * 0.5, reach.top - FRAME_LABEL_MARGIN),
        text: crate::axis::format_position(p.width()),
        size: FRAME_LABEL_FONT_SIZE,
        align: TextAlign::Center,
    };
    let height_label = TextRun {
        anchor: Point::new(reach.left - FRAME_LABEL_MARGIN, p.top + p.height() * 0.5),
        text: crate::axis::format_position(p.height()),
        size: FRAME_LABEL_FONT_SIZE,
        align: TextAlign::End,
    };
    shapes.push(Shape::new(Layer::FrameLabel, Geometry::Text(width_label)).fill(label_color));
    shapes.push(Shape::new(Layer::FrameLabel, Geometry::Text(height_label)).fill(label_color));
}
