// File: crates/diamond-studio/src/cli.rs
// Summary: Command-line surface: argument model, value parsers and command dispatch.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use diamond_core::{Color, GridPos, Palette, Point};
use diamond_render_skia::RenderOptions;

use crate::cache::PathCache;
use crate::files::FileManager;
use crate::notify::NotificationCenter;
use crate::report::describe;
use crate::session::{Action, ColorRole, DisplayFlag, FrameLayer, ResetTarget, Session};

/// Diamond painting pattern designer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Design file to open; defaults to the last file used
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print settings, derived sizes and highlights (default)
    Show,
    /// Change settings, then save
    Edit(EditArgs),
    /// Render the design to a PNG
    Export(ExportArgs),
    /// Write a design with default settings
    New {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Diamond size in mm
    #[arg(long, value_name = "WxH", value_parser = parse_dims)]
    pub diamond: Option<(u32, u32)>,
    /// Grid size in diamonds
    #[arg(long, value_name = "CxR", value_parser = parse_dims)]
    pub grid: Option<(u32, u32)>,
    /// Painting margin in mm
    #[arg(long, value_name = "N")]
    pub margin: Option<u32>,
    /// Mounting rim width in mm
    #[arg(long, value_name = "N")]
    pub rim: Option<u32>,
    /// Pattern offset; values outside one diamond reset to 0
    #[arg(long, value_name = "X,Y", value_parser = parse_offset, allow_hyphen_values = true)]
    pub offset: Option<(i32, i32)>,
    /// background, diamond, canvas_rim or mounting_rim
    #[arg(long, value_name = "ROLE=#HEX", value_parser = parse_color_edit)]
    pub color: Vec<Action>,
    /// show_scales, only_pattern, show_debug_lines, show_frame or show_exploded_frame
    #[arg(long, value_name = "FLAG=BOOL", value_parser = parse_display_edit)]
    pub display: Vec<Action>,
    /// structural, decorative1, decorative2 or wiggle_room
    #[arg(long = "frame-size", value_name = "LAYER=N", value_parser = parse_frame_size_edit)]
    pub frame_size: Vec<Action>,
    /// structural, decorative1 or decorative2
    #[arg(long = "frame-color", value_name = "LAYER=#HEX", value_parser = parse_frame_color_edit)]
    pub frame_color: Vec<Action>,
    /// Highlight a cell; the color defaults to the lightest palette color
    #[arg(long, value_name = "R,C[=#HEX]", value_parser = parse_highlight_edit, allow_hyphen_values = true)]
    pub highlight: Vec<Action>,
    /// Highlight the cell under a canvas pixel
    #[arg(long, value_name = "X,Y[=#HEX]", value_parser = parse_pick_edit)]
    pub pick: Vec<Action>,
    /// Remove every highlight on a cell
    #[arg(long, value_name = "R,C", value_parser = parse_cell, allow_hyphen_values = true)]
    pub unhighlight: Vec<GridPos>,
    /// Restore a group of settings to defaults
    #[arg(long, value_enum)]
    pub reset: Vec<ResetTarget>,
    /// Save to this path instead of the active file
    #[arg(long = "save-as", value_name = "PATH")]
    pub save_as: Option<PathBuf>,
}

impl EditArgs {
    /// Resets first, then sizes (offset after the diamond size), colors, display,
    /// frame, highlights, picks, removals.
    pub fn actions(&self) -> Vec<Action> {
        let mut out: Vec<Action> = self.reset.iter().map(|r| Action::Reset(*r)).collect();
        if let Some((width, height)) = self.diamond {
            out.push(Action::SetDiamondSize { width, height });
        }
        if let Some((columns, rows)) = self.grid {
            out.push(Action::SetGridSize { columns, rows });
        }
        out.extend(self.margin.map(Action::SetPaintingMargin));
        out.extend(self.rim.map(Action::SetMountingRimSize));
        if let Some((x, y)) = self.offset {
            out.push(Action::SetOffset { x, y });
        }
        out.extend(self.color.iter().cloned());
        out.extend(self.display.iter().cloned());
        out.extend(self.frame_size.iter().cloned());
        out.extend(self.frame_color.iter().cloned());
        out.extend(self.highlight.iter().cloned());
        out.extend(self.pick.iter().cloned());
        out.extend(self.unhighlight.iter().map(|p| Action::RemoveHighlight(*p)));
        out
    }
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file; defaults to <design name>.png next to the design
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,
    /// Pixels per mm
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,
    /// Skip scale and frame labels
    #[arg(long)]
    pub no_labels: bool,
}

fn split_pair<'a>(s: &'a str, sep: char, what: &str) -> Result<(&'a str, &'a str), String> {
    s.split_once(sep)
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("expected {what}, got '{s}'"))
}

fn parse_dims(s: &str) -> Result<(u32, u32), String> {
    let lower = s.to_ascii_lowercase();
    let (a, b) = split_pair(&lower, 'x', "<W>x<H>")?;
    let n = |v: &str| v.parse::<u32>().map_err(|e| format!("'{v}': {e}"));
    Ok((n(a)?, n(b)?))
}

fn parse_offset(s: &str) -> Result<(i32, i32), String> {
    let (a, b) = split_pair(s, ',', "<X>,<Y>")?;
    let n = |v: &str| v.parse::<i32>().map_err(|e| format!("'{v}': {e}"));
    Ok((n(a)?, n(b)?))
}

fn parse_cell(s: &str) -> Result<GridPos, String> {
    let (row, col) = parse_offset(s)?;
    Ok(GridPos::new(row, col))
}

fn parse_color(s: &str) -> Result<Color, String> { s.parse::<Color>().map_err(|e| e.to_string()) }

fn parse_color_edit(s: &str) -> Result<Action, String> {
    let (role, hex) = split_pair(s, '=', "<ROLE>=#<HEX>")?;
    Ok(Action::SetColor(role.parse::<ColorRole>()?, parse_color(hex)?))
}

fn parse_display_edit(s: &str) -> Result<Action, String> {
    let (flag, value) = split_pair(s, '=', "<FLAG>=<BOOL>")?;
    let on = match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => true,
        "false" | "off" | "no" | "0" => false,
        other => return Err(format!("'{other}' is not a boolean")),
    };
    Ok(Action::SetDisplay(flag.parse::<DisplayFlag>()?, on))
}

fn parse_frame_size_edit(s: &str) -> Result<Action, String> {
    let (layer, value) = split_pair(s, '=', "<LAYER>=<N>")?;
    let width = value.parse::<u32>().map_err(|e| format!("'{value}': {e}"))?;
    if matches!(layer.to_ascii_lowercase().replace('-', "_").as_str(), "wiggle_room" | "wiggle") {
        return Ok(Action::SetWiggleRoom(width));
    }
    Ok(Action::SetFrameSize(layer.parse::<FrameLayer>()?, width))
}

fn parse_frame_color_edit(s: &str) -> Result<Action, String> {
    let (layer, hex) = split_pair(s, '=', "<LAYER>=#<HEX>")?;
    Ok(Action::SetFrameColor(layer.parse::<FrameLayer>()?, parse_color(hex)?))
}

fn parse_highlight_edit(s: &str) -> Result<Action, String> {
    let (cell, color) = match s.split_once('=') {
        Some((cell, hex)) => (cell, parse_color(hex.trim())?),
        None => (s, Palette::LIGHTEST),
    };
    Ok(Action::AssignHighlight(parse_cell(cell)?, color))
}

fn parse_pick_edit(s: &str) -> Result<Action, String> {
    let (at, color) = match s.split_once('=') {
        Some((at, hex)) => (at, parse_color(hex.trim())?),
        None => (s, Palette::LIGHTEST),
    };
    let (x, y) = split_pair(at, ',', "<X>,<Y>")?;
    let n = |v: &str| v.parse::<f64>().map_err(|e| format!("'{v}': {e}"));
    Ok(Action::PickCell { at: Point::new(n(x)?, n(y)?), color })
}

/// `<active dir or default dir>/<active name or "diamonds">.png`.
fn default_export_path(session: &Session) -> PathBuf {
    let model = session.model();
    let dir = model.active_file_location().unwrap_or_else(|| session.files().default_dir());
    let stem = model.active_file_name().unwrap_or(diamond_core::types::DEFAULT_FILE_NAME);
    dir.join(format!("{stem}.png"))
}

fn open(session: &mut Session, file: Option<&Path>) -> Result<()> {
    session.startup(file);
    if let Some(file) = file {
        ensure!(
            session.model().active_file_path.as_deref() == Some(file),
            "could not open {}",
            file.display()
        );
    }
    Ok(())
}

/// Execute one CLI invocation against a fresh session.
pub fn run(cli: Cli) -> Result<()> {
    let notifications = NotificationCenter::shared();
    notifications.borrow_mut().subscribe(|n| {
        if n.is_failure() {
            eprintln!("{n}");
        } else {
            println!("{n}");
        }
    });
    let files = FileManager::new(Rc::clone(&notifications), PathCache::open_default());
    let mut session = Session::new(files, notifications);

    match cli.command.unwrap_or(Command::Show) {
        Command::New { path } => {
            if !session.save_as(&path) {
                bail!("could not create {}", path.display());
            }
        }
        Command::Show => {
            open(&mut session, cli.file.as_deref())?;
            let text = describe(&mut session);
            print!("{text}");
        }
        Command::Edit(args) => {
            open(&mut session, cli.file.as_deref())?;
            for action in args.actions() {
                session.dispatch(action);
            }
            let saved = match &args.save_as {
                Some(path) => session.save_as(path),
                None => session.quick_save(),
            };
            ensure!(saved, "saving the design failed");
        }
        Command::Export(args) => {
            open(&mut session, cli.file.as_deref())?;
            ensure!(args.scale > 0.0 && args.scale.is_finite(), "scale must be a positive number");
            let path = args.output.clone().unwrap_or_else(|| default_export_path(&session));
            let opts = RenderOptions { scale: args.scale, draw_labels: !args.no_labels };
            if !session.export_png(&path, &opts) {
                bail!("export to {} failed", path.display());
            }
        }
    }
    Ok(())
}

/// Parse `args` (including the binary name) without exiting on error.
pub fn parse_from<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).context("invalid command line")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(args: &[&str]) -> EditArgs {
        let mut argv = vec!["diamond-studio", "edit"];
        argv.extend_from_slice(args);
        match parse_from(argv).unwrap().command {
            Some(Command::Edit(e)) => e,
            other => panic!("expected edit, got {other:?}"),
        }
    }

    #[test]
    fn file_positional_precedes_subcommand() {
        let cli = parse_from(["diamond-studio", "art.dmnds", "show"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("art.dmnds")));
        assert!(matches!(cli.command, Some(Command::Show)));
        let bare = parse_from(["diamond-studio"]).unwrap();
        assert!(bare.file.is_none() && bare.command.is_none());
    }

    #[test]
    fn edit_flags_become_ordered_actions() {
        let e = edit(&[
            "--offset", "-5,7", "--diamond", "40x80", "--reset", "colors", "--highlight", "-1,2=#FF0000",
            "--unhighlight", "3,3", "--frame-size", "wiggle=9", "--display", "show_frame=off",
        ]);
        let actions = e.actions();
        assert_eq!(actions[0], Action::Reset(ResetTarget::Colors));
        assert_eq!(actions[1], Action::SetDiamondSize { width: 40, height: 80 });
        assert_eq!(actions[2], Action::SetOffset { x: -5, y: 7 });
        assert!(actions.contains(&Action::SetWiggleRoom(9)));
        assert!(actions.contains(&Action::SetDisplay(DisplayFlag::ShowFrame, false)));
        assert!(actions.contains(&Action::AssignHighlight(GridPos::new(-1, 2), Color::from_rgb(255, 0, 0))));
        assert_eq!(actions.last(), Some(&Action::RemoveHighlight(GridPos::new(3, 3))));
    }

    #[test]
    fn highlight_without_color_uses_palette() {
        let e = edit(&["--highlight", "0,4"]);
        assert_eq!(e.actions(), vec![Action::AssignHighlight(GridPos::new(0, 4), Palette::LIGHTEST)]);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(parse_from(["diamond-studio", "edit", "--diamond", "40"]).is_err());
        assert!(parse_from(["diamond-studio", "edit", "--color", "rim=#000000"]).is_err());
        assert!(parse_from(["diamond-studio", "edit", "--display", "show_frame=maybe"]).is_err());
        assert!(parse_from(["diamond-studio", "edit", "--frame-color", "structural=#12"]).is_err());
    }

    #[test]
    fn export_defaults() {
        let cli = parse_from(["diamond-studio", "export"]).unwrap();
        match cli.command {
            Some(Command::Export(a)) => {
                assert_eq!(a.scale, 1.0);
                assert!(!a.no_labels);
                assert!(a.output.is_none());
            }
            other => panic!("expected export, got {other:?}"),
        }
    }
}
