//! Error types for the geometry emitters.

use std::io;
use thiserror::Error;

/// Errors that can occur while serializing geometry.
#[derive(Error, Debug)]
pub enum EmitError {
    /// A solid part plan starts with a cut or contains no geometry.
    #[error("Part '{0}' has no positive geometry to start from")]
    EmptyPart(String),

    /// The DXF document could not be serialized.
    #[error("DXF write error: {0}")]
    Dxf(#[from] dxf::DxfError),

    /// I/O error during serialization.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for emitter operations.
pub type EmitResult<T> = Result<T, EmitError>;
