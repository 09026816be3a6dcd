//! Classified pixel storage.
//!
//! A [`PixelGrid`] holds the binarized colours of an image and models an
//! infinite white canvas: every read outside the image returns white, so
//! edge walks always terminate.

use image::RgbaImage;

use crate::error::{CurveError, Result};
use crate::types::{Colour, Point};

/// Bytes per RGBA pixel.
const CHANNELS: usize = 4;

/// Immutable grid of classified colours, stored column by column.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    colours: Vec<Colour>,
}

impl PixelGrid {
    /// Build a grid from a row-major RGBA buffer.
    ///
    /// `stride` is the byte length of one row and may include padding past
    /// `width * 4`. Gray pixels are collapsed to black on the way in.
    pub fn from_rgba(width: u32, height: u32, stride: usize, bytes: &[u8]) -> Result<Self> {
        let row_len = (width as usize)
            .checked_mul(CHANNELS)
            .ok_or_else(|| CurveError::InvalidBuffer {
                message: format!("width {} overflows the row length", width),
            })?;
        if stride < row_len {
            return Err(CurveError::InvalidBuffer {
                message: format!("stride {} is smaller than width * 4 ({})", stride, row_len),
            });
        }

        let required = match height {
            0 => Some(0),
            h => stride
                .checked_mul(h as usize - 1)
                .and_then(|rows| rows.checked_add(row_len)),
        }
        .ok_or_else(|| CurveError::InvalidBuffer {
            message: format!("{} rows of stride {} overflow the address space", height, stride),
        })?;
        if bytes.len() < required {
            return Err(CurveError::InvalidBuffer {
                message: format!(
                    "buffer holds {} bytes, {}x{} with stride {} needs {}",
                    bytes.len(),
                    width,
                    height,
                    stride,
                    required
                ),
            });
        }

        let mut colours = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width as usize {
            for y in 0..height as usize {
                let index = y * stride + x * CHANNELS;
                let mut rgba = [0u8; CHANNELS];
                rgba.copy_from_slice(&bytes[index..index + CHANNELS]);
                colours.push(Colour::from_rgba(rgba).classify());
            }
        }

        Ok(Self {
            width,
            height,
            colours,
        })
    }

    /// Build a grid from a decoded image.
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut colours = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                colours.push(Colour::from_rgba(image.get_pixel(x, y).0).classify());
            }
        }

        Self {
            width,
            height,
            colours,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length of the image diagonal in pixels.
    pub fn diagonal(&self) -> f64 {
        (self.width as f64).hypot(self.height as f64)
    }

    /// Colour at `(x, y)`, or white outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Colour {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Colour::WHITE;
        }
        self.colours[x as usize * self.height as usize + y as usize]
    }

    pub fn is_black(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_black()
    }

    /// True when the four probes at distance `r` along the axes are black.
    pub fn fits(&self, x: i32, y: i32, r: i32) -> bool {
        self.is_black(x - r, y)
            && self.is_black(x + r, y)
            && self.is_black(x, y - r)
            && self.is_black(x, y + r)
    }

    /// All pixels in scan order: x outer, y inner.
    pub fn pixels(&self) -> impl Iterator<Item = (Point, Colour)> + '_ {
        let height = self.height as usize;
        self.colours.iter().enumerate().map(move |(i, &colour)| {
            let point = Point::new((i / height) as i32, (i % height) as i32);
            (point, colour)
        })
    }
}
