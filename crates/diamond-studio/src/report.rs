// File: crates/diamond-studio/src/report.rs
// Summary: Plain-text summary of the open design for the `show` command.

use std::fmt::{self, Write as _};

use diamond_core::{ApplicationModel, Scene};

use crate::session::Session;

/// Settings, derived sizes, canvas size and highlights, one fact per line.
pub fn describe(session: &mut Session) -> String {
    let model = session.model().clone();
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_summary(&mut out, &model, session.scene());
    out
}

fn write_summary(out: &mut String, model: &ApplicationModel, scene: &Scene) -> fmt::Result {
    let s = &model.size_settings;
    let (pw, ph) = s.pattern_dims();
    let (tw, th) = s.painting_dims();

    let file = model
        .active_file_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unsaved)".to_string());
    writeln!(out, "file:            {file}")?;
    writeln!(out, "diamond:         {} x {} mm", s.diamond_width, s.diamond_height)?;
    writeln!(out, "grid:            {} x {}", s.grid_columns, s.grid_rows)?;
    writeln!(out, "margin / rim:    {} / {} mm", s.painting_margin, s.mounting_rim_size)?;
    writeln!(out, "offset:          {}, {}", s.offset_x, s.offset_y)?;
    writeln!(out, "pattern size:    {pw} x {ph} mm")?;
    writeln!(out, "painting size:   {tw} x {th} mm")?;
    writeln!(out, "canvas:          {} x {} px", scene.width, scene.height)?;

    let c = &model.color_settings;
    writeln!(
        out,
        "colors:          background {} diamond {} canvas_rim {} mounting_rim {}",
        c.background, c.diamond, c.canvas_rim, c.mounting_rim
    )?;
    let d = &model.display_settings;
    writeln!(
        out,
        "display:         scales={} only_pattern={} debug={} frame={} exploded={}",
        d.show_scales, d.only_pattern, d.show_debug_lines, d.show_frame, d.show_exploded_frame
    )?;
    let f = &model.frame_size_settings;
    writeln!(
        out,
        "frame:           structural {} decorative1 {} decorative2 {} wiggle {}",
        f.structural_layer_width, f.decorative_layer1_width, f.decorative_layer2_width, f.wiggle_room
    )?;

    writeln!(out, "highlights:      {}", model.highlights.len())?;
    for h in model.highlights.iter() {
        writeln!(out, "  ({}, {}) {}", h.position.row, h.position.col, h.color)?;
    }
    Ok(())
}
