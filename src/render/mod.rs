//! Rendering module for curvetrace.
//!
//! Loads source images and paints traced curves back onto them.

mod overlay;
mod png;

pub use overlay::{mark_point, render_overlay, MarkStyle, DEFAULT_MARKER_SIZE};
pub use png::{read_png, write_png};
