//! # Pedalkit Layout
//!
//! The layout calculator: a pure function of the design configuration that
//! derives every placement coordinate, hole diameter, and panel dimension
//! for both enclosure variants.
//!
//! Output is an ordered set of placement directives (see [`directive`]).
//! The calculator has no I/O and no backend knowledge; the emitters in
//! `pedalkit-emit` turn directives into concrete file formats.
//!
//! Callers must run `DesignConfig::validate_geometry` before planning:
//! the calculator reproduces whatever the parameters say, including rows
//! that overflow their panel.

pub mod calculator;
pub mod case3d;
pub mod directive;
pub mod panels;

pub use calculator::{corner_positions, finger_joint_segments, footswitch_row, wall_shell};
pub use case3d::{base_part, board_mount_positions, lid_part, lid_screw_positions};
pub use directive::{
    CircleHole, EdgeJoints, FingerSegment, Panel, PanelEdge, PanelKind, Point2, Point3, Polyline,
    Shape3, Size3, SolidOp, SolidPart,
};
pub use panels::{bottom_panel, front_back_panel, left_right_panel, panel_set, top_panel};
