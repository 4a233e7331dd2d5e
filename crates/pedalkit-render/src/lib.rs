//! # Pedalkit Render
//!
//! Optional preview generation: PNG snapshots of the printed case parts via
//! the system OpenSCAD install, and SVG line drawings converted from the
//! laser-cut panel DXFs.

pub mod error;
pub mod preview;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use preview::{render_scad, render_scad_with};
pub use svg::dxf_to_svg;
