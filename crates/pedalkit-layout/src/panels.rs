//! Panel plans for the laser-cut case: top, bottom, front/back, and
//! left/right outlines with their holes and cutouts.
//!
//! Finger-joint segments are computed for the mating edges and attached as
//! metadata, but they are not cut into the outlines. The joint geometry was
//! never applied in the shipped design; completing it would change every
//! panel's edge profile, so the segments stay informational until that
//! decision is made. Panels assemble with screws in the meantime.

use crate::calculator::{corner_positions, finger_joint_segments, footswitch_row};
use crate::case3d::board_mount_positions;
use crate::directive::{
    CircleHole, EdgeJoints, Panel, PanelEdge, PanelKind, Point2, Polyline,
};
use pedalkit_core::DesignConfig;

/// Plan the top panel: footswitch mount holes on the centerline, the LED
/// hole near the far corner, and the four assembly screw holes.
pub fn top_panel(cfg: &DesignConfig) -> Panel {
    let (w, h) = (cfg.case.length, cfg.case.width);
    let mut holes = Vec::new();

    for x in footswitch_row(
        cfg.buttons.count,
        cfg.footswitch.cap_diameter,
        cfg.buttons.spacing,
        cfg.case.length,
    ) {
        holes.push(CircleHole::new(
            Point2::new(x, cfg.case.width / 2.0),
            cfg.footswitch.mount_diameter,
        ));
    }

    holes.push(CircleHole::new(
        Point2::new(w - cfg.led.offset_x, h - cfg.led.offset_y),
        cfg.led.hole_diameter,
    ));

    for p in corner_positions(w, h, cfg.lid.screw_offset) {
        holes.push(CircleHole::new(p, cfg.lid.screw_diameter));
    }

    Panel {
        kind: PanelKind::Top,
        width: w,
        height: h,
        outline: Polyline::rectangle(w, h),
        holes,
        cutouts: Vec::new(),
        joints: Vec::new(),
    }
}

/// Plan the bottom panel: board mounting holes and assembly screw holes.
pub fn bottom_panel(cfg: &DesignConfig) -> Panel {
    let (w, h) = (cfg.case.length, cfg.case.width);
    let mut holes = Vec::new();

    for p in board_mount_positions(cfg) {
        holes.push(CircleHole::new(p, cfg.standoffs.screw_diameter));
    }
    for p in corner_positions(w, h, cfg.lid.screw_offset) {
        holes.push(CircleHole::new(p, cfg.lid.screw_diameter));
    }

    Panel {
        kind: PanelKind::Bottom,
        width: w,
        height: h,
        outline: Polyline::rectangle(w, h),
        holes,
        cutouts: Vec::new(),
        joints: Vec::new(),
    }
}

/// Plan the front/back side panel, with the USB-C cutout on the front copy.
pub fn front_back_panel(cfg: &DesignConfig) -> Panel {
    let (w, h) = (cfg.case.length, cfg.case.height);
    let usb = Polyline::rectangle_at(
        w / 2.0 - cfg.usb.width / 2.0,
        cfg.usb.offset_from_bottom,
        cfg.usb.width,
        cfg.usb.height,
    );

    Panel {
        kind: PanelKind::FrontBack,
        width: w,
        height: h,
        outline: Polyline::rectangle(w, h),
        holes: Vec::new(),
        cutouts: vec![usb],
        joints: vec![EdgeJoints {
            edge: PanelEdge::Bottom,
            segments: finger_joint_segments(
                w,
                cfg.case.material_thickness,
                cfg.joints.joint_size,
                true,
            ),
        }],
    }
}

/// Plan the left/right side panel.
pub fn left_right_panel(cfg: &DesignConfig) -> Panel {
    let (w, h) = (cfg.case.width, cfg.case.height);

    Panel {
        kind: PanelKind::LeftRight,
        width: w,
        height: h,
        outline: Polyline::rectangle(w, h),
        holes: Vec::new(),
        cutouts: Vec::new(),
        joints: vec![EdgeJoints {
            edge: PanelEdge::Bottom,
            segments: finger_joint_segments(
                w,
                cfg.case.material_thickness,
                cfg.joints.joint_size,
                false,
            ),
        }],
    }
}

/// Plan the full laser-cut panel set, one drawing per physical panel shape.
pub fn panel_set(cfg: &DesignConfig) -> Vec<Panel> {
    let panels = vec![
        top_panel(cfg),
        bottom_panel(cfg),
        front_back_panel(cfg),
        left_right_panel(cfg),
    ];
    tracing::debug!(panels = panels.len(), "Planned laser-cut panel set");
    panels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitting_config() -> DesignConfig {
        let mut cfg = DesignConfig::default();
        cfg.buttons.count = 5;
        cfg.buttons.gpio_pins = vec![4, 5, 6, 7, 8];
        cfg.buttons.spacing = 10.0;
        cfg
    }

    #[test]
    fn test_panel_set_kinds() {
        let cfg = fitting_config();
        let panels = panel_set(&cfg);
        let kinds: Vec<_> = panels.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PanelKind::Top,
                PanelKind::Bottom,
                PanelKind::FrontBack,
                PanelKind::LeftRight,
            ]
        );
    }

    #[test]
    fn test_top_panel_hole_inventory() {
        let cfg = fitting_config();
        let top = top_panel(&cfg);
        // 5 footswitch mounts + LED + 4 screws.
        assert_eq!(top.holes.len(), 10);
        assert_eq!(top.holes[0].diameter, 12.0);
        // LED near the far corner.
        let led = top.holes[5];
        assert_eq!(led.center, Point2::new(140.0, 90.0));
        assert_eq!(led.diameter, 3.0);
        // Assembly screws at the 5mm corner insets.
        assert_eq!(top.holes[6].center, Point2::new(5.0, 5.0));
        assert_eq!(top.holes[9].center, Point2::new(145.0, 95.0));
        assert_eq!(top.holes[9].diameter, 3.2);
    }

    #[test]
    fn test_bottom_panel_board_holes() {
        let cfg = fitting_config();
        let bottom = bottom_panel(&cfg);
        assert_eq!(bottom.holes.len(), 8);
        assert_eq!(bottom.holes[0].diameter, 2.5);
        assert!((bottom.holes[0].center.x - 62.85).abs() < 1e-9);
    }

    #[test]
    fn test_front_back_usb_cutout() {
        let cfg = fitting_config();
        let panel = front_back_panel(&cfg);
        assert_eq!(panel.width, 150.0);
        assert_eq!(panel.height, 30.0);
        assert_eq!(panel.cutouts.len(), 1);
        let usb = &panel.cutouts[0];
        assert_eq!(usb.points[0], Point2::new(70.0, 5.0));
        assert_eq!(usb.points[2], Point2::new(80.0, 10.0));
        assert!(usb.closed);
    }

    #[test]
    fn test_side_panels_carry_joint_metadata() {
        let cfg = fitting_config();
        let fb = front_back_panel(&cfg);
        let lr = left_right_panel(&cfg);

        assert_eq!(fb.joints.len(), 1);
        assert_eq!(fb.joints[0].edge, PanelEdge::Bottom);
        assert_eq!(fb.joints[0].segments.len(), 15);
        assert!(fb.joints[0].segments[0].is_tab());

        assert_eq!(lr.joints[0].segments.len(), 10);
        assert!(!lr.joints[0].segments[0].is_tab());

        // Plates carry none.
        assert!(top_panel(&cfg).joints.is_empty());
    }
}
