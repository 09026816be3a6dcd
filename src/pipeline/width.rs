//! Stroke half-width estimation.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::{CurveError, Result};
use crate::grid::PixelGrid;

/// Half-width used when no pixel is thick enough to be sampled.
pub const DEFAULT_HALF_WIDTH: u32 = 1;

/// Estimate the half-width of the stroke.
///
/// Every interior black pixel is probed with growing radii along the axes;
/// the first radius whose probes leave the stroke is that pixel's sample.
/// Boundary pixels (already failing at radius 1) carry no thickness and are
/// skipped. The most frequent sample wins; among equally frequent samples
/// the one seen first in scan order is kept.
///
/// Fails with [`CurveError::InvalidInputFormat`] on the first pixel that is
/// neither black nor white.
pub fn estimate_half_width(grid: &PixelGrid) -> Result<u32> {
    // sample -> (count, first seen)
    let mut histogram: HashMap<u32, (usize, usize)> = HashMap::new();
    let mut seen = 0usize;

    for (point, colour) in grid.pixels() {
        if colour.is_white() {
            continue;
        }
        if !colour.is_black() {
            return Err(CurveError::InvalidInputFormat {
                x: point.x,
                y: point.y,
                colour,
            });
        }

        let radius = first_failing_radius(grid, point.x, point.y);
        if radius == 1 {
            continue;
        }

        let entry = histogram.entry(radius).or_insert((0, seen));
        entry.0 += 1;
        seen += 1;
    }

    let mode = histogram
        .iter()
        .max_by(|(_, (count_a, order_a)), (_, (count_b, order_b))| {
            count_a.cmp(count_b).then(order_b.cmp(order_a))
        })
        .map(|(&radius, _)| radius);

    match mode {
        Some(radius) => {
            debug!(
                "half-width {} from {} interior pixels ({} distinct radii)",
                radius,
                seen,
                histogram.len()
            );
            Ok(radius)
        }
        None => {
            warn!(
                "no interior stroke pixels, using default half-width {}",
                DEFAULT_HALF_WIDTH
            );
            Ok(DEFAULT_HALF_WIDTH)
        }
    }
}

/// Smallest radius at which `(x, y)` no longer fits inside the stroke.
fn first_failing_radius(grid: &PixelGrid, x: i32, y: i32) -> u32 {
    let mut radius = 1;
    while grid.fits(x, y, radius) {
        radius += 1;
    }
    radius as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn canvas(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    fn fill(img: &mut RgbaImage, xs: std::ops::RangeInclusive<u32>, ys: std::ops::RangeInclusive<u32>) {
        for x in xs {
            for y in ys.clone() {
                img.put_pixel(x, y, BLACK);
            }
        }
    }

    #[test]
    fn test_horizontal_line_width_five() {
        let mut img = canvas(100, 100);
        fill(&mut img, 10..=90, 48..=52);

        let grid = PixelGrid::from_image(&img);
        assert_eq!(estimate_half_width(&grid).unwrap(), 2);
    }

    #[test]
    fn test_vertical_line_width_nine() {
        let mut img = canvas(60, 120);
        fill(&mut img, 26..=34, 10..=110);

        // Interior columns sample 2, 3, 4, 5, 4, 3, 2 across the stroke.
        let grid = PixelGrid::from_image(&img);
        assert_eq!(estimate_half_width(&grid).unwrap(), 2);
    }

    #[test]
    fn test_first_failing_radius() {
        let mut img = canvas(20, 20);
        fill(&mut img, 5..=15, 8..=12);
        let grid = PixelGrid::from_image(&img);

        assert_eq!(first_failing_radius(&grid, 10, 10), 3);
        assert_eq!(first_failing_radius(&grid, 10, 9), 2);
        assert_eq!(first_failing_radius(&grid, 10, 8), 1);
    }

    #[test]
    fn test_blank_image_uses_default() {
        let grid = PixelGrid::from_image(&canvas(10, 10));
        assert_eq!(estimate_half_width(&grid).unwrap(), DEFAULT_HALF_WIDTH);
    }

    #[test]
    fn test_thin_line_uses_default() {
        let mut img = canvas(30, 30);
        fill(&mut img, 2..=27, 15..=16);
        let grid = PixelGrid::from_image(&img);
        assert_eq!(estimate_half_width(&grid).unwrap(), DEFAULT_HALF_WIDTH);
    }

    #[test]
    fn test_rejects_coloured_pixel() {
        let mut img = canvas(10, 10);
        fill(&mut img, 2..=8, 2..=8);
        img.put_pixel(5, 5, Rgba([255, 0, 0, 255]));

        let grid = PixelGrid::from_image(&img);
        match estimate_half_width(&grid) {
            Err(CurveError::InvalidInputFormat { x, y, colour }) => {
                assert_eq!((x, y), (5, 5));
                assert_eq!(colour.to_rgba(), [255, 0, 0, 255]);
            }
            other => panic!("expected InvalidInputFormat, got {:?}", other),
        }
    }
}
