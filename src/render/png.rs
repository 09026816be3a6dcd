//! PNG input and output.

use std::path::Path;

use image::RgbaImage;

use crate::error::{CurveError, Result};

/// Load an image file and convert it to RGBA.
pub fn read_png(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| CurveError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    Ok(img)
}

/// Write an RGBA image to a PNG file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| CurveError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
