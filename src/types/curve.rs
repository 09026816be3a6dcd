//! Ordered result of curve tracing.

use serde::{Deserialize, Serialize};

use super::Point;

/// An ordered chain of centerline points, head first.
///
/// The successor of the point at index `i` is the point at `i + 1`; the
/// last point has no successor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveResult {
    points: Vec<Point>,
}

impl CurveResult {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Head of the chain.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Tail of the chain.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Successor of the node at `index`, `None` for the tail.
    pub fn next_of(&self, index: usize) -> Option<Point> {
        self.points.get(index + 1).copied()
    }

    /// Consecutive `(from, to)` links of the chain.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for CurveResult {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a CurveResult {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
