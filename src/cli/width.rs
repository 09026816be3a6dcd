use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::grid::PixelGrid;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{estimate_half_width, extract_candidates};
use crate::render::read_png;

/// Estimate the stroke half-width of an image
#[derive(Args, Debug)]
pub struct WidthArgs {
    /// PNG with a single black stroke on white
    #[arg(required = true)]
    pub input: PathBuf,
}

pub fn run(args: WidthArgs, printer: &Printer) -> Result<()> {
    let display = display_path(&args.input);
    let grid = PixelGrid::from_image(&read_png(&args.input)?);

    let size = estimate_half_width(&grid)?;
    let candidates = extract_candidates(&grid, size);

    printer.info(
        "Sampled",
        &format!(
            "{} ({}x{}, {})",
            display,
            grid.width(),
            grid.height(),
            plural(candidates.len(), "candidate", "candidates")
        ),
    );
    println!("{}", size);

    Ok(())
}
