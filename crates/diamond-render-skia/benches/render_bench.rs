use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diamond_core::{build_scene, ApplicationModel, LayoutOptions, Scene};
use diamond_render_skia::{RenderOptions, SkiaRenderer};

fn build(cols: u32, rows: u32) -> Scene {
    let mut model = ApplicationModel::new();
    model.size_settings.grid_columns = cols;
    model.size_settings.grid_rows = rows;
    model.size_settings.diamond_width = 12;
    model.size_settings.diamond_height = 20;
    build_scene(&model.scene_input(), &LayoutOptions::default())
}

fn bench_render(c: &mut Criterion) {
    let renderer = SkiaRenderer::new();
    let mut group = c.benchmark_group("render_png_bytes");
    for &(cols, rows) in &[(20u32, 10u32), (80, 40)] {
        group.bench_function(format!("grid_{cols}x{rows}"), |b| {
            let scene = build(cols, rows);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&scene, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
