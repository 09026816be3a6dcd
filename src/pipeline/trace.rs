//! Ordering of centerline points into a single chain.
//!
//! The tracer starts at the first point and repeatedly looks for the
//! nearest plausible successor with a growing search radius. When several
//! points qualify, the one continuing the direction of the last segment
//! most smoothly is taken.

use log::debug;

use crate::error::{CurveError, Result};
use crate::types::{CurveResult, Point};

/// Search radii used while tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceParams {
    pub initial_radius: f64,
    pub radius_step: f64,
    pub max_radius: f64,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            initial_radius: 10.0,
            radius_step: 5.0,
            max_radius: f64::MAX,
        }
    }
}

/// One link of the traced chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStep {
    pub from: Point,
    pub to: Point,
    /// Search radius at which `to` was found.
    pub radius: f64,
    /// Number of pool points inside that radius.
    pub candidates: usize,
}

/// Order `points` into a chain starting at the first point.
pub fn trace_curve(points: Vec<Point>, params: &TraceParams) -> Result<CurveResult> {
    trace_curve_with_steps(points, params).map(|(curve, _)| curve)
}

/// Like [`trace_curve`], also returning the search record of every link.
pub fn trace_curve_with_steps(
    points: Vec<Point>,
    params: &TraceParams,
) -> Result<(CurveResult, Vec<TraceStep>)> {
    let mut pool = points;
    if pool.is_empty() {
        return Ok((CurveResult::default(), Vec::new()));
    }

    let total = pool.len();
    let mut chain = Vec::with_capacity(total);
    let mut steps = Vec::with_capacity(total - 1);
    chain.push(pool.remove(0));

    while !pool.is_empty() {
        let current = chain[chain.len() - 1];
        let previous = chain.len().checked_sub(2).map(|i| chain[i]);

        let (radius, neighbors) = find_neighbors(&pool, current, params)?;

        let chosen = match previous {
            Some(previous) if neighbors.len() > 1 => {
                select_smoothest(&pool, &neighbors, previous, current)?
            }
            _ => neighbors[0],
        };

        let next = pool.remove(chosen);
        steps.push(TraceStep {
            from: current,
            to: next,
            radius,
            candidates: neighbors.len(),
        });
        chain.push(next);
    }

    debug!("traced {} of {} points", chain.len(), total);
    Ok((CurveResult::new(chain), steps))
}

/// Pool indices strictly closer than the first radius that finds any.
fn find_neighbors(
    pool: &[Point],
    current: Point,
    params: &TraceParams,
) -> Result<(f64, Vec<usize>)> {
    let mut radius = params.initial_radius;
    loop {
        let neighbors: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p.length_to(current) < radius)
            .map(|(i, _)| i)
            .collect();

        if !neighbors.is_empty() {
            return Ok((radius, neighbors));
        }

        radius += params.radius_step;
        if radius > params.max_radius {
            return Err(CurveError::CurveProcessingFailed {
                message: format!(
                    "no successor for {} within {} px ({} points left)",
                    current,
                    params.max_radius,
                    pool.len()
                ),
            });
        }
    }
}

/// Neighbor whose direction from `current` deviates least from the slope of
/// the `previous -> current` segment. The first minimum wins.
fn select_smoothest(
    pool: &[Point],
    neighbors: &[usize],
    previous: Point,
    current: Point,
) -> Result<usize> {
    let direction = previous.slope_to(current);

    neighbors
        .iter()
        .map(|&i| (i, slope_deviation(direction, current.slope_to(pool[i]))))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
        .ok_or_else(|| CurveError::CurveProcessingFailed {
            message: format!("no candidate to continue the curve from {}", current),
        })
}

/// Absolute difference of two slopes; equal slopes (including two vertical
/// ones) deviate by zero.
fn slope_deviation(a: f64, b: f64) -> f64 {
    if a == b {
        0.0
    } else {
        (a - b).abs()
    }
}
