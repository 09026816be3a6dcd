//! Trace command implementation.
//!
//! Loads a PNG, runs the split pipeline and writes the ordered centerline
//! points, optionally with an overlay image.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::SplitConfig;
use crate::error::{CurveError, Result};
use crate::export::{export, ExportFormat};
use crate::grid::PixelGrid;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::split_curve_staged;
use crate::render::{read_png, render_overlay, write_png, MarkStyle, DEFAULT_MARKER_SIZE};

/// Trace the centerline of a stroke
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// PNG with a single black stroke on white
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output format (default: from --output extension, else json)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write points to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write a PNG with the traced points marked
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Which points to mark on the overlay
    #[arg(long, value_enum, default_value_t = MarkStyle::Skeleton)]
    pub marks: MarkStyle,

    /// Marker half-size in pixels
    #[arg(long, default_value_t = DEFAULT_MARKER_SIZE)]
    pub marker_size: u32,

    /// Config file (default: ./curvetrace.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the coarse cluster radius
    #[arg(long)]
    pub coarse_radius: Option<f64>,

    /// Override the fine cluster radius
    #[arg(long)]
    pub fine_radius: Option<f64>,
}

/// Resolve the configuration from file and command-line overrides.
pub fn resolve_config(
    config: Option<&Path>,
    coarse_radius: Option<f64>,
    fine_radius: Option<f64>,
) -> Result<SplitConfig> {
    let cwd = std::env::current_dir()?;
    let mut resolved = SplitConfig::discover(config, &cwd)?;

    if let Some(radius) = coarse_radius {
        resolved.coarse_radius = radius;
    }
    if let Some(radius) = fine_radius {
        resolved.fine_radius = radius;
    }

    resolved.validate()?;
    Ok(resolved)
}

/// Output format: explicit flag, then output extension, then JSON.
fn resolve_format(format: Option<ExportFormat>, output: Option<&Path>) -> ExportFormat {
    format
        .or_else(|| {
            output
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .and_then(ExportFormat::from_extension)
        })
        .unwrap_or_default()
}

pub fn run(args: TraceArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), args.coarse_radius, args.fine_radius)?;
    let display = display_path(&args.input);

    printer.status("Loading", &display);
    let img = read_png(&args.input)?;
    let grid = PixelGrid::from_image(&img);

    let report = match split_curve_staged(&grid, &config) {
        Ok(report) => report,
        Err(e) => {
            printer.error("Failed", &display);
            return Err(e);
        }
    };

    printer.info("Estimated", &format!("half-width {} px", report.half_width));
    printer.info(
        "Filtered",
        &format!(
            "{} -> {} coarse -> {} fine",
            plural(report.candidates.len(), "candidate", "candidates"),
            report.coarse.len(),
            report.fine.len()
        ),
    );

    let curve = report.curve;
    if curve.is_empty() {
        printer.warning("Warning", &format!("no stroke found in {}", display));
    }
    printer.status("Traced", &plural(curve.len(), "point", "points"));

    let format = resolve_format(args.format, args.output.as_deref());
    let text = export(&curve, format, grid.width(), grid.height())?;

    match &args.output {
        Some(path) => {
            fs::write(path, text).map_err(|e| CurveError::Io {
                path: path.clone(),
                message: format!("Failed to write points: {}", e),
            })?;
            printer.status("Wrote", &display_path(path));
        }
        None => print!("{}", text),
    }

    if let Some(path) = &args.overlay {
        let marked = render_overlay(&img, &curve, args.marks, args.marker_size);
        write_png(&marked, path)?;
        printer.status("Rendered", &display_path(path));
    }

    Ok(())
}
