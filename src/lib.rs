//! # Pedalkit
//!
//! Parametric build-artifact generator for a DIY ESP32-S3 footswitch
//! keyboard. From one TOML design configuration it produces:
//! - OpenSCAD models for the 3D-printed case (base and lid)
//! - DXF panel drawings for the laser-cut case variant
//! - A bill of materials and rough fabrication estimates
//! - A KiCad netlist and conceptual layout for the button PCB
//! - The firmware `config.h` header
//! - Optional PNG/SVG previews
//!
//! ## Architecture
//!
//! Pedalkit is organized as a workspace with multiple crates:
//!
//! 1. **pedalkit-core** - Design configuration, validation, error types
//! 2. **pedalkit-layout** - Layout arithmetic and geometry planning
//! 3. **pedalkit-emit** - OpenSCAD and DXF serialization
//! 4. **pedalkit-reports** - BOM and fabrication estimates
//! 5. **pedalkit-eda** - Netlist, PCB layout report, firmware header
//! 6. **pedalkit-render** - OpenSCAD previews and DXF-to-SVG conversion
//! 7. **pedalkit** - Main binary that integrates all crates

pub mod artifacts;

pub use pedalkit_core::{ConfigError, DesignConfig, Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout clean for reports
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
