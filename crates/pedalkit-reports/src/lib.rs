//! # Pedalkit Reports
//!
//! Human-readable outputs derived from the design configuration: the bill
//! of materials and rough fabrication estimates for both the 3D-printed and
//! laser-cut enclosure variants.

pub mod bom;
pub mod estimates;

pub use bom::{bill_of_materials, render_text, BomItem, Quantity};
pub use estimates::{
    laser_estimate, print_estimate, render_laser_text, render_print_text, LaserEstimate,
    PrintEstimate,
};
