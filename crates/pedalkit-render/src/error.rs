//! Error types for preview rendering.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing previews.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The external rendering tool is not installed or not on PATH.
    #[error("'{tool}' not found on PATH; install it to enable previews")]
    ToolNotFound { tool: String },

    /// The external rendering tool ran but reported failure.
    #[error("'{tool}' failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// The DXF file could not be parsed.
    #[error("Failed to parse DXF file {path}: {source}")]
    DxfParse {
        path: PathBuf,
        source: dxf::DxfError,
    },

    /// I/O error while reading or writing preview files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
