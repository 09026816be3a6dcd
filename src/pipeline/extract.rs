//! Candidate centerline pixels.

use log::debug;

use crate::grid::PixelGrid;
use crate::types::Point;

/// Collect every stroke pixel whose axis probes at `size` stay inside the
/// stroke. Points come out in grid scan order (x outer, y inner).
pub fn extract_candidates(grid: &PixelGrid, size: u32) -> Vec<Point> {
    let radius = size as i32;
    let candidates: Vec<Point> = grid
        .pixels()
        .filter(|(_, colour)| !colour.is_white())
        .filter(|(point, _)| grid.fits(point.x, point.y, radius))
        .map(|(point, _)| point)
        .collect();

    debug!("{} candidates at half-width {}", candidates.len(), size);
    candidates
}

/// Extract candidates at `size`, stepping the half-width down toward 1
/// while nothing fits.
///
/// Strokes 3 or 4 px thick sample a half-width of 2 but have no pixel that
/// fits at 2. Returns the half-width the candidates were taken at.
pub fn extract_centered(grid: &PixelGrid, size: u32) -> (u32, Vec<Point>) {
    let mut size = size.max(1);
    loop {
        let candidates = extract_candidates(grid, size);
        if !candidates.is_empty() || size == 1 {
            return (size, candidates);
        }
        debug!("nothing fits at half-width {}, retrying at {}", size, size - 1);
        size -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_horizontal_band_centre_row() {
        let mut img = RgbaImage::from_pixel(20, 10, Rgba([255, 255, 255, 255]));
        for x in 2..=12 {
            for y in 3..=7 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let grid = PixelGrid::from_image(&img);

        let points = extract_candidates(&grid, 2);
        let expected: Vec<Point> = (4..=10).map(|x| Point::new(x, 5)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_scan_order_is_column_major() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let grid = PixelGrid::from_image(&img);

        let points = extract_candidates(&grid, 1);
        assert_eq!(
            points,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_centered_steps_down_for_thin_band() {
        let mut img = RgbaImage::from_pixel(20, 10, Rgba([255, 255, 255, 255]));
        for x in 2..=12 {
            for y in 3..=5 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let grid = PixelGrid::from_image(&img);

        assert!(extract_candidates(&grid, 2).is_empty());
        let (size, points) = extract_centered(&grid, 2);
        assert_eq!(size, 1);
        let expected: Vec<Point> = (3..=11).map(|x| Point::new(x, 4)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_centered_keeps_size_that_fits() {
        let img = RgbaImage::from_pixel(9, 9, Rgba([0, 0, 0, 255]));
        let grid = PixelGrid::from_image(&img);

        let (size, points) = extract_centered(&grid, 3);
        assert_eq!(size, 3);
        assert_eq!(points, extract_candidates(&grid, 3));
    }

    #[test]
    fn test_centered_blank_grid_stops_at_one() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        let grid = PixelGrid::from_image(&img);
        assert_eq!(extract_centered(&grid, 4), (1, Vec::new()));
    }

    #[test]
    fn test_blank_grid_has_no_candidates() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        let grid = PixelGrid::from_image(&img);
        assert!(extract_candidates(&grid, 1).is_empty());
    }
}
