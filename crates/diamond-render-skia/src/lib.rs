// File: crates/diamond-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: paints a diamond-core Scene into RGBA pixels or PNG bytes.
// Notes:
// - Shapes are painted in scene order; clip rectangles apply per shape.
// - PNG encoding goes through the `image` crate so the bytes do not depend on Skia's encoder build.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use diamond_core::Scene;
use skia_safe as skia;

mod draw;

/// Raster knobs that do not change the scene itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Pixels per scene unit.
    pub scale: f32,
    /// Text (scale labels, frame dimensions) is skipped when false.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self { Self { scale: 1.0, draw_labels: true } }
}

impl RenderOptions {
    /// Output pixel size for `scene`: rounded, at least 1x1.
    pub fn pixel_size(&self, scene: &Scene) -> (u32, u32) {
        let px = |v: u32| ((v as f32 * self.scale).round() as u32).max(1);
        (px(scene.width), px(scene.height))
    }
}

pub struct SkiaRenderer {
    font: Option<skia::Font>,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    /// Loads the platform default typeface once; without one, labels are skipped.
    pub fn new() -> Self {
        let typeface = skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::default());
        if typeface.is_none() {
            tracing::warn!("no default typeface available; labels will not be drawn");
        }
        Self { font: typeface.map(|tf| skia::Font::from_typeface(tf, 12.0)) }
    }

    /// Render into a tightly packed, unpremultiplied RGBA buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = opts.pixel_size(scene);
        let _span = tracing::debug_span!("render", width = w, height = h, shapes = scene.shapes.len()).entered();

        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), scene, opts);

        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("reading back surface pixels failed"));
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(scene, opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or_else(|| anyhow!("pixel buffer size mismatch"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    /// Render and write a PNG, creating the parent directory if needed.
    pub fn render_to_png(&self, scene: &Scene, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene, opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        canvas.clear(draw::sk_color(scene.background));
        canvas.save();
        canvas.scale((opts.scale, opts.scale));
        let font = if opts.draw_labels { self.font.as_ref() } else { None };
        for shape in &scene.shapes {
            draw::draw_shape(canvas, shape, font);
        }
        canvas.restore();
    }
}
