// File: crates/diamond-core/src/lib.rs
// Summary: Core library entry point; settings model, highlight store, layout engine and document I/O.

pub mod axis;
pub mod color;
pub mod document;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod highlight;
pub mod layout;
pub mod model;
pub mod scene;
pub mod settings;
pub mod types;

pub use axis::{compute_axis_ticks, AxisTick, AxisTicks, ScaleStyle, TickKind};
pub use color::{Color, Palette};
pub use document::Document;
pub use error::{ColorParseError, DocumentError};
pub use frame::{compute_frame_layout, FrameLayout, FramePerimeterRule};
pub use geometry::{Point, Polygon, Rect, Size};
pub use highlight::{GridPos, Highlight, HighlightStore};
pub use layout::{compute_diamond_grid, compute_mounting_rim_polygon, compute_painting_origin, hit_test_cell, DiamondCell,
    LayoutOptions};
pub use model::ApplicationModel;
pub use scene::{build_scene, Geometry, Layer, Scene, SceneInput, Shape, Stroke, TextAlign, TextRun};
pub use settings::{clamp_offset, ColorSettings, DisplaySettings, FrameColorSettings, FrameSizeSettings, SizeSettings};
pub use types::{Insets, MAX_GRID_CELLS, MAX_LENGTH_MM};
