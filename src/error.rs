//! Error types for html2pdf.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures reported by the rendering engine itself.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The DevTools connection or a protocol command failed.
    #[error("browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// The browser could not be configured (missing executable, bad options).
    #[error("browser configuration rejected: {0}")]
    Config(String),

    /// The engine finished printing without producing any bytes.
    #[error("PDF generation failed without a specific error")]
    NoOutput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that abort the single conversion attempt.
///
/// None of these are recovered locally: each one travels up to the host
/// surface, is written to the error log once, and ends the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input HTML file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("HTML content is empty or invalid: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("could not find or initialize the rendering engine")]
    EngineInit(#[source] EngineError),

    #[error("failed to load HTML content into the rendering engine")]
    Load(#[source] EngineError),

    #[error("could not determine the output directory for {}", .0.display())]
    OutputPath(PathBuf),

    #[error("output file must have the .pdf extension: {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("error generating the PDF")]
    Export(#[source] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
