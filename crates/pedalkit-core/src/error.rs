//! Error types for pedalkit.
//!
//! This module provides structured error types for configuration validation
//! and file handling. All error types use `thiserror` for ergonomic error
//! handling.

use std::io;
use thiserror::Error;

/// Errors produced by design configuration validation.
///
/// The layout calculator itself never clamps or errors; every constraint on
/// the parameter set is checked up front and reported through this type.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A dimension that must be strictly positive is zero or negative.
    #[error("Dimension '{name}' must be positive: {value}")]
    NonPositiveDimension {
        /// The configuration field name.
        name: &'static str,
        /// The offending value in millimeters.
        value: f64,
    },

    /// The configured button count does not match the GPIO pin list.
    #[error("Button count {num_buttons} does not match GPIO pin list length {pins}")]
    PinCountMismatch {
        /// The configured number of buttons.
        num_buttons: usize,
        /// The number of GPIO pins in the list.
        pins: usize,
    },

    /// A row of features is wider than the panel it is placed on.
    #[error("{feature} row overflows the panel: needs {required:.2}mm, panel is {available:.2}mm")]
    RowOverflow {
        /// The feature whose row overflows.
        feature: &'static str,
        /// The width required by the row.
        required: f64,
        /// The width available on the panel.
        available: f64,
    },

    /// A cutout does not fit within its host panel or wall.
    #[error("Cutout '{name}' does not fit: {reason}")]
    CutoutDoesNotFit {
        /// The cutout name.
        name: &'static str,
        /// Why the cutout does not fit.
        reason: String,
    },

    /// A configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A configuration file could not be parsed as TOML.
    #[error("Failed to parse config file {path}: {reason}")]
    Parse {
        /// The path that could not be parsed.
        path: String,
        /// The TOML parse error message.
        reason: String,
    },
}

/// Main error type for pedalkit.
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration validation or loading error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for configuration validation.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NonPositiveDimension {
            name: "case.length",
            value: -5.0,
        };
        assert_eq!(err.to_string(), "Dimension 'case.length' must be positive: -5");

        let err = ConfigError::PinCountMismatch {
            num_buttons: 7,
            pins: 5,
        };
        assert_eq!(
            err.to_string(),
            "Button count 7 does not match GPIO pin list length 5"
        );
    }

    #[test]
    fn test_row_overflow_display() {
        let err = ConfigError::RowOverflow {
            feature: "Footswitch",
            required: 202.0,
            available: 150.0,
        };
        assert_eq!(
            err.to_string(),
            "Footswitch row overflows the panel: needs 202.00mm, panel is 150.00mm"
        );
    }

    #[test]
    fn test_error_conversion() {
        let cfg_err = ConfigError::PinCountMismatch {
            num_buttons: 7,
            pins: 6,
        };
        let err: Error = cfg_err.into();
        assert!(matches!(err, Error::Config(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
