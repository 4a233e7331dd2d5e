//! Determinism and cross-variant consistency checks for the layout
//! calculator.

use pedalkit_core::DesignConfig;
use pedalkit_layout::{base_part, lid_part, panel_set, PanelKind, Shape3, SolidOp};

fn fitting_config() -> DesignConfig {
    let mut cfg = DesignConfig::default();
    cfg.buttons.count = 5;
    cfg.buttons.gpio_pins = vec![4, 5, 6, 7, 8];
    cfg.buttons.spacing = 10.0;
    cfg
}

#[test]
fn test_plans_are_deterministic() {
    let cfg = fitting_config();
    assert_eq!(base_part(&cfg), base_part(&cfg));
    assert_eq!(lid_part(&cfg), lid_part(&cfg));
    assert_eq!(panel_set(&cfg), panel_set(&cfg));
}

#[test]
fn test_lid_and_top_panel_agree_on_footswitch_centers() {
    // The 3D lid and the laser-cut top plate must put the switches in the
    // same places.
    let cfg = fitting_config();
    let lid = lid_part(&cfg);
    let top = panel_set(&cfg)
        .into_iter()
        .find(|p| p.kind == PanelKind::Top)
        .unwrap();

    let lid_centers: Vec<f64> = lid
        .ops
        .iter()
        .filter_map(|op| match op {
            SolidOp::Cut(Shape3::Cylinder {
                origin, diameter, ..
            }) if *diameter == cfg.footswitch.mount_diameter => Some(origin.x),
            _ => None,
        })
        .collect();
    let panel_centers: Vec<f64> = top
        .holes
        .iter()
        .filter(|h| h.diameter == cfg.footswitch.mount_diameter)
        .map(|h| h.center.x)
        .collect();

    assert_eq!(lid_centers, panel_centers);
    assert_eq!(lid_centers.len(), cfg.buttons.count);
}

#[test]
fn test_base_and_bottom_panel_agree_on_board_holes() {
    let cfg = fitting_config();
    let base = base_part(&cfg);
    let bottom = panel_set(&cfg)
        .into_iter()
        .find(|p| p.kind == PanelKind::Bottom)
        .unwrap();

    let standoff_centers: Vec<(f64, f64)> = base
        .ops
        .iter()
        .filter_map(|op| match op {
            SolidOp::Add(Shape3::Cylinder {
                origin, diameter, ..
            }) if *diameter == cfg.standoffs.diameter => Some((origin.x, origin.y)),
            _ => None,
        })
        .collect();
    let panel_centers: Vec<(f64, f64)> = bottom
        .holes
        .iter()
        .filter(|h| h.diameter == cfg.standoffs.screw_diameter)
        .map(|h| (h.center.x, h.center.y))
        .collect();

    assert_eq!(standoff_centers, panel_centers);
}

#[test]
fn test_button_count_scales_hole_count() {
    let mut cfg = fitting_config();
    let five = panel_set(&cfg);
    cfg.buttons.count = 3;
    cfg.buttons.gpio_pins = vec![4, 5, 6];
    let three = panel_set(&cfg);

    let count = |panels: &[pedalkit_layout::Panel]| {
        panels
            .iter()
            .find(|p| p.kind == PanelKind::Top)
            .unwrap()
            .holes
            .iter()
            .filter(|h| h.diameter == cfg.footswitch.mount_diameter)
            .count()
    };
    assert_eq!(count(&five), 5);
    assert_eq!(count(&three), 3);
}
