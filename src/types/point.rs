//! Integer pixel coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pixel position. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn length_to(self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }

    /// Slope of the line through `self` and `other`.
    ///
    /// Vertical lines report `f64::INFINITY` regardless of direction.
    pub fn slope_to(self, other: Point) -> f64 {
        if self.x == other.x {
            return f64::INFINITY;
        }
        (self.y - other.y) as f64 / (self.x - other.x) as f64
    }

    /// Same point shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_to() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.length_to(b), 5.0);
        assert_eq!(b.length_to(a), 5.0);
        assert_eq!(a.length_to(a), 0.0);
    }

    #[test]
    fn test_slope_to() {
        assert_eq!(Point::new(0, 0).slope_to(Point::new(2, 1)), 0.5);
        assert_eq!(Point::new(2, 1).slope_to(Point::new(0, 0)), 0.5);
        assert_eq!(Point::new(0, 0).slope_to(Point::new(4, -4)), -1.0);
    }

    #[test]
    fn test_slope_vertical_is_positive_infinity() {
        assert_eq!(Point::new(5, 0).slope_to(Point::new(5, 9)), f64::INFINITY);
        assert_eq!(Point::new(5, 9).slope_to(Point::new(5, 0)), f64::INFINITY);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Point::new(12, -3)).unwrap();
        assert_eq!(json, r#"{"x":12,"y":-3}"#);
    }
}
