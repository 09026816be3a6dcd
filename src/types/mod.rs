//! Core types for curvetrace.

mod colour;
mod curve;
mod point;

pub use colour::Colour;
pub use curve::CurveResult;
pub use point::Point;
