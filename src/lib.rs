//! curvetrace - stroke centerline tracing
//!
//! A library for turning a single hand-drawn black stroke on a white raster
//! image into an ordered polyline running from one end of the stroke to the
//! other.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use config::SplitConfig;
pub use error::{CurveError, Result};
pub use export::{export, to_csv, to_json, to_svg, ExportFormat};
pub use grid::PixelGrid;
pub use pipeline::{
    split_curve, split_curve_staged, split_curve_with, split_image, SplitReport, TraceParams,
    TraceStep,
};
pub use render::{read_png, render_overlay, write_png, MarkStyle};
pub use types::{Colour, CurveResult, Point};
