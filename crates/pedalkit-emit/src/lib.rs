//! # Pedalkit Emit
//!
//! Serializers that turn layout plans into manufacturing files: OpenSCAD
//! source for the printed case parts and DXF drawings for the laser-cut
//! panels. Everything here renders to in-memory buffers; file placement is
//! the caller's concern.

pub mod dxf_writer;
pub mod error;
pub mod scad;

pub use dxf_writer::{panel_bytes, panel_drawing};
pub use error::{EmitError, EmitResult};
pub use scad::render_part;
