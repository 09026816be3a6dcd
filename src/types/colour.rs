//! Colour type and binarization rules.

use std::fmt;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Marker colour for the head of a traced curve.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Marker colour for the tail of a traced curve.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Build a colour from an `[r, g, b, a]` array.
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when all colour channels are 255. Alpha is ignored.
    pub fn is_white(self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }

    /// True when all colour channels are 0. Alpha is ignored.
    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// True when the three colour channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Collapse gray shades onto black.
    ///
    /// Any gray that is not pure white becomes pure black with the original
    /// alpha. Every other colour is returned unchanged, so black and white
    /// are fixed points.
    pub fn classify(self) -> Self {
        if self.is_gray() && !self.is_white() {
            Self::new(0, 0, 0, self.a)
        } else {
            self
        }
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1), opaque.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| (from as f64 + t * (to as f64 - from as f64)) as u8;
        Self::rgb(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}
