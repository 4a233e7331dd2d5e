//! # Pedalkit EDA
//!
//! Electronics-side artifacts: the KiCad netlist for the button
//! daughterboard, its conceptual layout report, and the firmware `config.h`
//! header.

pub mod firmware;
pub mod layout_report;
pub mod netlist;

pub use firmware::config_header;
pub use layout_report::layout_report;
pub use netlist::button_netlist;
