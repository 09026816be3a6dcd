//! The stroke splitting pipeline.
//!
//! Stages run strictly in order, each taking ownership of the previous
//! stage's points:
//!
//! 1. half-width estimation over the classified grid
//! 2. candidate extraction at that half-width, stepping down while nothing
//!    fits
//! 3. coarse cluster filter
//! 4. centerline alignment
//! 5. fine cluster filter
//! 6. curve tracing

mod align;
mod cluster;
mod extract;
mod trace;
mod width;

pub use align::{
    align_point, align_points, find_abscissa_edge, find_edge_point, find_row_edge_point, Line,
    Walk,
};
pub use cluster::filter_by_distance;
pub use extract::{extract_candidates, extract_centered};
pub use trace::{trace_curve, trace_curve_with_steps, TraceParams, TraceStep};
pub use width::{estimate_half_width, DEFAULT_HALF_WIDTH};

use image::RgbaImage;
use log::debug;

use crate::config::SplitConfig;
use crate::error::Result;
use crate::grid::PixelGrid;
use crate::types::{CurveResult, Point};

/// Every intermediate of a pipeline run.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Half-width the candidates were extracted at.
    pub half_width: u32,
    pub candidates: Vec<Point>,
    pub coarse: Vec<Point>,
    pub aligned: Vec<Point>,
    pub fine: Vec<Point>,
    pub steps: Vec<TraceStep>,
    pub curve: CurveResult,
}

/// Trace the stroke in `grid` with the default configuration.
pub fn split_curve(grid: &PixelGrid) -> Result<CurveResult> {
    split_curve_with(grid, &SplitConfig::default())
}

/// Trace the stroke in `grid`.
pub fn split_curve_with(grid: &PixelGrid, config: &SplitConfig) -> Result<CurveResult> {
    let size = estimate_half_width(grid)?;
    let (_, points) = extract_centered(grid, size);
    let points = filter_by_distance(points, config.coarse_radius);
    let points = align_points(grid, points);
    let points = filter_by_distance(points, config.fine_radius);
    trace_curve(points, &trace_params(grid, config))
}

/// Trace the stroke in a decoded image with the default configuration.
pub fn split_image(image: &RgbaImage) -> Result<CurveResult> {
    split_curve(&PixelGrid::from_image(image))
}

/// Run the pipeline and keep every intermediate.
pub fn split_curve_staged(grid: &PixelGrid, config: &SplitConfig) -> Result<SplitReport> {
    let (half_width, candidates) = extract_centered(grid, estimate_half_width(grid)?);
    let coarse = filter_by_distance(candidates.clone(), config.coarse_radius);
    let aligned = align_points(grid, coarse.clone());
    let fine = filter_by_distance(aligned.clone(), config.fine_radius);
    let (curve, steps) = trace_curve_with_steps(fine.clone(), &trace_params(grid, config))?;

    debug!(
        "split {}x{}: {} candidates, {} coarse, {} fine, {} traced",
        grid.width(),
        grid.height(),
        candidates.len(),
        coarse.len(),
        fine.len(),
        curve.len()
    );

    Ok(SplitReport {
        half_width,
        candidates,
        coarse,
        aligned,
        fine,
        steps,
        curve,
    })
}

fn trace_params(grid: &PixelGrid, config: &SplitConfig) -> TraceParams {
    TraceParams {
        initial_radius: config.search_radius,
        radius_step: config.search_step,
        max_radius: config.effective_max_search_radius(grid.diagonal()),
    }
}
