// File: crates/diamond-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG of the default design.

use diamond_core::{build_scene, ApplicationModel, LayoutOptions};
use diamond_render_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_smoke_png() {
    let model = ApplicationModel::new();
    let scene = build_scene(&model.scene_input(), &LayoutOptions::default());
    let renderer = SkiaRenderer::new();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&scene, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = renderer.render_to_png_bytes(&scene, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (scene.width, scene.height));
}
