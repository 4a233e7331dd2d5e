//! Solid-model plans for the 3D-printed case: a base and a lid that screw
//! together. The case splits at half height; the lid walls overlap the base
//! walls by `wall_thickness`.
//!
//! Both plans are ordered [`SolidOp`] recipes. Cut heights carry a 0.1mm
//! overshoot so boolean faces never sit exactly flush.

use crate::calculator::{corner_positions, footswitch_row, wall_shell};
use crate::directive::{Point2, Point3, Shape3, Size3, SolidOp, SolidPart};
use pedalkit_core::DesignConfig;

/// Overshoot added to cut primitives so they pierce cleanly.
const CUT_CLEARANCE: f64 = 0.1;

/// Extra clearance on the lid screw through-holes.
const THROUGH_HOLE_CLEARANCE: f64 = 0.5;

/// Centers of the four board mounting holes, in case coordinates.
///
/// The board sits centered in the case; the holes are inset
/// `standoffs.offset_from_edge` from the board corners.
pub fn board_mount_positions(cfg: &DesignConfig) -> [Point2; 4] {
    let shift_x = (cfg.case.length - cfg.board.length) / 2.0;
    let shift_y = (cfg.case.width - cfg.board.width) / 2.0;
    corner_positions(cfg.board.length, cfg.board.width, cfg.standoffs.offset_from_edge)
        .map(|p| Point2::new(p.x + shift_x, p.y + shift_y))
}

/// Centers of the four lid assembly screws, inset from the inner wall faces.
pub fn lid_screw_positions(cfg: &DesignConfig) -> [Point2; 4] {
    corner_positions(
        cfg.case.length,
        cfg.case.width,
        cfg.case.wall_thickness + cfg.lid.screw_offset,
    )
}

/// Plan the base part: floor and lower walls, USB cutout, board standoffs
/// with screw holes, and lid-screw standoffs with blind screw holes.
pub fn base_part(cfg: &DesignConfig) -> SolidPart {
    let t = cfg.case.wall_thickness;
    let lower = cfg.case.lower_wall_height();
    let mut ops = Vec::new();

    // Hollow shell with floor.
    let (outer, inner) = wall_shell(cfg.case.length, cfg.case.width, lower, t);
    ops.push(SolidOp::Add(outer));
    ops.push(SolidOp::Cut(inner));

    // USB cutout through the front wall, centered vertically in the wall.
    ops.push(SolidOp::Cut(Shape3::cuboid_centered(
        Point3::new(
            cfg.case.length / 2.0,
            0.0,
            t + (lower - cfg.usb.height) / 2.0,
        ),
        Size3::new(cfg.usb.width, t + CUT_CLEARANCE, cfg.usb.height),
    )));

    // Board standoffs, then their screw holes.
    let mounts = board_mount_positions(cfg);
    for p in mounts {
        ops.push(SolidOp::Add(Shape3::cylinder(
            Point3::new(p.x, p.y, t),
            cfg.standoffs.diameter,
            cfg.standoffs.height,
        )));
    }
    for p in mounts {
        ops.push(SolidOp::Cut(Shape3::cylinder(
            Point3::new(p.x, p.y, t),
            cfg.standoffs.screw_diameter,
            cfg.standoffs.height + CUT_CLEARANCE,
        )));
    }

    // Lid-screw standoffs with blind holes running below the standoff top.
    let screws = lid_screw_positions(cfg);
    for p in screws {
        ops.push(SolidOp::Add(Shape3::cylinder(
            Point3::new(p.x, p.y, t),
            cfg.lid.screw_head_diameter,
            cfg.lid.standoff_height,
        )));
    }
    for p in screws {
        ops.push(SolidOp::Cut(Shape3::cylinder(
            Point3::new(p.x, p.y, t),
            cfg.lid.screw_diameter,
            cfg.lid.standoff_height + cfg.lid.screw_hole_depth,
        )));
    }

    SolidPart {
        name: "case_base".to_string(),
        ops,
    }
}

/// Plan the lid part: top plate and upper walls, footswitch mount holes
/// along the case centerline, the status LED hole beside the USB port, and
/// the lid screw through-holes.
pub fn lid_part(cfg: &DesignConfig) -> SolidPart {
    let t = cfg.case.wall_thickness;
    let upper = cfg.case.upper_wall_height();
    let mut ops = Vec::new();

    let (outer, inner) = wall_shell(cfg.case.length, cfg.case.width, upper, t);
    ops.push(SolidOp::Add(outer));
    ops.push(SolidOp::Cut(inner));

    // Footswitch mount holes along the centerline.
    for x in footswitch_row(
        cfg.buttons.count,
        cfg.footswitch.cap_diameter,
        cfg.buttons.spacing,
        cfg.case.length,
    ) {
        ops.push(SolidOp::Cut(Shape3::cylinder(
            Point3::new(x, cfg.case.width / 2.0, t),
            cfg.footswitch.mount_diameter,
            t + cfg.footswitch.depth + CUT_CLEARANCE,
        )));
    }

    // LED hole through the plate, offset from the USB port position.
    ops.push(SolidOp::Cut(Shape3::cylinder_centered(
        Point3::new(
            cfg.case.length / 2.0 - cfg.usb.width / 2.0 - 5.0,
            t / 2.0,
            t,
        ),
        cfg.led.hole_diameter,
        t + CUT_CLEARANCE,
    )));

    // Lid screw through-holes.
    for p in lid_screw_positions(cfg) {
        ops.push(SolidOp::Cut(Shape3::cylinder(
            Point3::new(p.x, p.y, 0.0),
            cfg.lid.screw_diameter + THROUGH_HOLE_CLEARANCE,
            t + CUT_CLEARANCE,
        )));
    }

    SolidPart {
        name: "case_lid".to_string(),
        ops,
    }
}
