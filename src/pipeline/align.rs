//! Centerline alignment.
//!
//! Candidates sit somewhere inside the stroke. Each one is moved to the
//! middle of the stroke, measured along the normal to the local stroke
//! direction. The direction comes from the stroke edge one column to the
//! left and one column to the right of the point.

use log::debug;

use crate::grid::PixelGrid;
use crate::types::Point;

/// Direction of a one-dimensional edge walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Towards larger coordinates.
    Forward,
    /// Towards smaller coordinates.
    Backward,
}

impl Walk {
    fn step(self) -> i32 {
        match self {
            Walk::Forward => 1,
            Walk::Backward => -1,
        }
    }
}

/// A line `y = k * x + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub k: f64,
    pub b: f64,
}

impl Line {
    /// Line through two points with different abscissas.
    pub fn through(first: Point, second: Point) -> Self {
        let k = first.slope_to(second);
        let b = first.y as f64 - k * first.x as f64;
        Self { k, b }
    }

    /// Line through `point` perpendicular to a line of slope `k_target`.
    ///
    /// `k_target` must be finite and non-zero.
    pub fn normal(k_target: f64, point: Point) -> Self {
        let inverse = 1.0 / k_target;
        Self {
            k: -inverse,
            b: point.y as f64 + point.x as f64 * inverse,
        }
    }

    /// Ordinate at `x`, rounded to the nearest pixel.
    pub fn ordinate(&self, x: i32) -> i32 {
        (self.k * x as f64 + self.b).round() as i32
    }
}

/// Move every point to the stroke centerline.
pub fn align_points(grid: &PixelGrid, points: Vec<Point>) -> Vec<Point> {
    let aligned: Vec<Point> = points.into_iter().map(|p| align_point(grid, p)).collect();
    debug!("aligned {} points", aligned.len());
    aligned
}

/// Center a single point inside the stroke.
pub fn align_point(grid: &PixelGrid, point: Point) -> Point {
    let left = find_edge_point(grid, point.offset(-1, 0), Walk::Forward);
    let right = find_edge_point(grid, point.offset(1, 0), Walk::Forward);

    // Flat edge: the stroke runs along one axis here. Center across
    // whichever axis the stroke is thinner on, vertical on ties.
    if left.y == right.y {
        let top = find_edge_point(grid, point, Walk::Forward);
        let bottom = find_edge_point(grid, point, Walk::Backward);
        let east = find_row_edge_point(grid, point, Walk::Forward);
        let west = find_row_edge_point(grid, point, Walk::Backward);

        if east.x - west.x < top.y - bottom.y {
            return Point::new((east.x + west.x) / 2, point.y);
        }
        return Point::new(point.x, (top.y + bottom.y) / 2);
    }

    let edge = Line::through(left, right);
    let normal = Line::normal(edge.k, point);

    let start = find_abscissa_edge(grid, point, &normal, Walk::Backward);
    let finish = find_abscissa_edge(grid, point, &normal, Walk::Forward);

    let x = (start + finish) / 2;
    Point::new(x, normal.ordinate(x))
}

/// Walk along the column of `start` while pixels are black and return the
/// last black position. Returns one step behind `start` when `start` itself
/// is not black.
pub fn find_edge_point(grid: &PixelGrid, start: Point, walk: Walk) -> Point {
    let step = walk.step();
    let mut y = start.y;
    while grid.is_black(start.x, y) {
        y += step;
    }
    Point::new(start.x, y - step)
}

/// Row counterpart of [`find_edge_point`].
pub fn find_row_edge_point(grid: &PixelGrid, start: Point, walk: Walk) -> Point {
    let step = walk.step();
    let mut x = start.x;
    while grid.is_black(x, start.y) {
        x += step;
    }
    Point::new(x - step, start.y)
}

/// Walk along `line` from `start.x` while the pixel on the line is black and
/// return the last black abscissa.
pub fn find_abscissa_edge(grid: &PixelGrid, start: Point, line: &Line, walk: Walk) -> i32 {
    let step = walk.step();
    let mut x = start.x;
    while grid.is_black(x, line.ordinate(x)) {
        x += step;
    }
    x - step
}
