use miette::Diagnostic;
use thiserror::Error;

use crate::types::Colour;

/// Main error type for curvetrace operations
#[derive(Error, Diagnostic, Debug)]
pub enum CurveError {
    #[error("Invalid input format: pixel ({x}, {y}) is {colour}, expected black or white")]
    #[diagnostic(
        code(curvetrace::input),
        help("The image must contain a single black stroke on a white background")
    )]
    InvalidInputFormat { x: i32, y: i32, colour: Colour },

    #[error("Curve processing failed: {message}")]
    #[diagnostic(code(curvetrace::trace))]
    CurveProcessingFailed { message: String },

    #[error("Invalid pixel buffer: {message}")]
    #[diagnostic(code(curvetrace::buffer))]
    InvalidBuffer { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(curvetrace::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(curvetrace::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(curvetrace::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CurveError>;
