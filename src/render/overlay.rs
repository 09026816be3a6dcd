//! Marker overlays for traced curves.
//!
//! Paints square markers onto a copy of the source image. The skeleton style
//! colours every point on a blue to red gradient from head to tail; the
//! endpoints style only marks the head (blue) and the tail (red).

use clap::ValueEnum;
use image::{Rgba, RgbaImage};

use crate::types::{Colour, CurveResult, Point};

/// Default marker half-size in pixels.
pub const DEFAULT_MARKER_SIZE: u32 = 3;

/// Which points of the curve to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MarkStyle {
    /// Every point, coloured by position along the curve
    #[default]
    Skeleton,
    /// Head and tail only
    Endpoints,
}

/// Return a copy of `base` with the curve's points marked.
pub fn render_overlay(base: &RgbaImage, curve: &CurveResult, style: MarkStyle, size: u32) -> RgbaImage {
    let mut img = base.clone();

    match style {
        MarkStyle::Skeleton => {
            let count = curve.len();
            for (i, &point) in curve.iter().enumerate() {
                let t = i as f64 / count as f64;
                mark_point(&mut img, point, size, Colour::BLUE.lerp(Colour::RED, t));
            }
        }
        MarkStyle::Endpoints => {
            if let Some(head) = curve.first() {
                mark_point(&mut img, head, size, Colour::BLUE);
            }
            if let Some(tail) = curve.last() {
                mark_point(&mut img, tail, size, Colour::RED);
            }
        }
    }

    img
}

/// Fill the square `[x - size, x + size) x [y - size, y + size)` with
/// `colour`, clipped to the image. The pixel's alpha is kept.
pub fn mark_point(img: &mut RgbaImage, point: Point, size: u32, colour: Colour) {
    let size = size.max(1) as i64;
    let (width, height) = (img.width() as i64, img.height() as i64);

    let x0 = (point.x as i64 - size).max(0);
    let x1 = (point.x as i64 + size).min(width);
    let y0 = (point.y as i64 - size).max(0);
    let y1 = (point.y as i64 + size).min(height);

    for x in x0..x1 {
        for y in y0..y1 {
            let pixel = img.get_pixel_mut(x as u32, y as u32);
            let alpha = pixel.0[3];
            *pixel = Rgba([colour.r, colour.g, colour.b, alpha]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_mark_point_square() {
        let mut img = white(10, 10);
        mark_point(&mut img, Point::new(5, 5), 2, Colour::RED);

        assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(6, 6).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(7, 5).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(2, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_mark_point_clipped() {
        let mut img = white(4, 4);
        mark_point(&mut img, Point::new(0, 0), 3, Colour::BLUE);
        mark_point(&mut img, Point::new(-20, 50), 3, Colour::BLUE);

        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(3, 3).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_endpoints_style() {
        let curve = CurveResult::new(vec![
            Point::new(2, 2),
            Point::new(10, 2),
            Point::new(18, 2),
        ]);
        let img = render_overlay(&white(21, 5), &curve, MarkStyle::Endpoints, 1);

        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(18, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(10, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_skeleton_gradient() {
        let curve = CurveResult::new(vec![Point::new(2, 2), Point::new(10, 2)]);
        let img = render_overlay(&white(14, 5), &curve, MarkStyle::Skeleton, 1);

        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(10, 2).0, [127, 0, 127, 255]);
    }

    #[test]
    fn test_empty_curve_leaves_image_untouched() {
        let base = white(6, 6);
        let img = render_overlay(&base, &CurveResult::default(), MarkStyle::Skeleton, 3);
        assert_eq!(img, base);
    }
}
