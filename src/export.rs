//! Polyline export formats.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};
use crate::types::CurveResult;

/// Output format for a traced curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Array of `{"x": .., "y": ..}` objects
    #[default]
    Json,
    /// `x,y` rows with a header line
    Csv,
    /// SVG document with a single polyline
    Svg,
}

impl ExportFormat {
    /// Pick a format from a file extension, if recognised.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

/// Render `curve` in `format`. `width`/`height` size the SVG canvas.
pub fn export(curve: &CurveResult, format: ExportFormat, width: u32, height: u32) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(curve),
        ExportFormat::Csv => Ok(to_csv(curve)),
        ExportFormat::Svg => Ok(to_svg(curve, width, height)),
    }
}

/// Pretty-printed JSON array of points.
pub fn to_json(curve: &CurveResult) -> Result<String> {
    serde_json::to_string_pretty(curve).map_err(|e| CurveError::Parse {
        message: format!("Failed to serialize curve: {}", e),
        help: None,
    })
}

pub fn to_csv(curve: &CurveResult) -> String {
    let mut out = String::from("x,y\n");
    for point in curve {
        let _ = writeln!(out, "{},{}", point.x, point.y);
    }
    out
}

/// The `points` attribute of an SVG polyline.
pub fn svg_points_attr(curve: &CurveResult) -> String {
    curve
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn to_svg(curve: &CurveResult, width: u32, height: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(
        out,
        r#"  <polyline points="{}" fill="none" stroke="red" stroke-width="1"/>"#,
        svg_points_attr(curve)
    );
    out.push_str("</svg>\n");
    out
}
