//! Fabrication estimates for both enclosure variants.
//!
//! The numbers are deliberately rough. Print volume treats the hollow shells
//! as infill-only and the standoffs as solid; laser cut length counts only
//! the outer panel perimeters. A slicer or laser-cutter software gives
//! accurate figures.

use pedalkit_core::DesignConfig;
use pedalkit_layout::panel_set;
use serde::Serialize;
use std::f64::consts::PI;

/// 3D-printing material and time estimate for base plus lid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrintEstimate {
    pub total_volume_mm3: f64,
    pub total_weight_g: f64,
    pub total_cost_usd: f64,
    pub print_time_hours: f64,
}

/// Laser-cutting material and time estimate for the four panel drawings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaserEstimate {
    pub total_area_mm2: f64,
    pub total_cut_length_mm: f64,
    pub total_cost_usd: f64,
    pub cut_time_minutes: f64,
}

fn cylinder_volume(diameter: f64, height: f64) -> f64 {
    PI * (diameter / 2.0).powi(2) * height
}

/// Estimate filament use for the printed case.
pub fn print_estimate(config: &DesignConfig) -> PrintEstimate {
    let case = &config.case;
    let t = case.wall_thickness;
    let half_height = case.height / 2.0;

    // Base and lid share the same outer envelope and inner void.
    let outer_volume = case.length * case.width * half_height;
    let inner_hollow_volume =
        (case.length - 2.0 * t) * (case.width - 2.0 * t) * (half_height - t);

    let usb_cutout_volume = config.usb.width * (t + 0.1) * config.usb.height;
    let footswitch_hole_volume = config.buttons.count as f64
        * cylinder_volume(config.footswitch.mount_diameter, t + config.footswitch.depth);
    let led_hole_volume = cylinder_volume(config.led.hole_diameter, t + 0.1);
    let lid_through_hole_volume = 4.0 * cylinder_volume(config.lid.screw_diameter, t + 0.1);

    let base_hollow_volume = outer_volume - inner_hollow_volume - usb_cutout_volume;
    let lid_hollow_volume = outer_volume
        - inner_hollow_volume
        - footswitch_hole_volume
        - led_hole_volume
        - lid_through_hole_volume;

    // Standoffs print solid.
    let standoff_volume =
        4.0 * cylinder_volume(config.standoffs.diameter, config.standoffs.height);
    let lid_standoff_volume =
        4.0 * cylinder_volume(config.lid.screw_head_diameter, config.lid.standoff_height);

    let rates = &config.estimating;
    let total_volume_mm3 = (base_hollow_volume + lid_hollow_volume) * rates.infill
        + standoff_volume
        + lid_standoff_volume;

    let total_weight_g = total_volume_mm3 * rates.filament_density_g_mm3;
    let total_cost_usd = (total_weight_g / 1000.0) * rates.filament_cost_per_kg;
    let print_time_hours = (total_volume_mm3 / rates.printing_speed_mm3_s) / 3600.0;

    tracing::debug!(total_volume_mm3, total_weight_g, "Computed print estimate");
    PrintEstimate {
        total_volume_mm3,
        total_weight_g,
        total_cost_usd,
        print_time_hours,
    }
}

/// Estimate acrylic use for the laser-cut case.
pub fn laser_estimate(config: &DesignConfig) -> LaserEstimate {
    let mut total_area_mm2 = 0.0;
    let mut total_cut_length_mm = 0.0;
    for panel in panel_set(config) {
        total_area_mm2 += panel.area();
        total_cut_length_mm += panel.perimeter();
    }

    let rates = &config.estimating;
    let total_cost_usd = total_area_mm2 * rates.acrylic_cost_per_mm2;
    let cut_time_minutes = (total_cut_length_mm / rates.laser_cut_speed_mm_s) / 60.0;

    tracing::debug!(total_area_mm2, total_cut_length_mm, "Computed laser estimate");
    LaserEstimate {
        total_area_mm2,
        total_cut_length_mm,
        total_cost_usd,
        cut_time_minutes,
    }
}

/// Render the print estimate as the plain-text report.
pub fn render_print_text(estimate: &PrintEstimate) -> String {
    format!(
        "--- 3D Printing Estimates (Rough) ---\n\
         \x20 Total Volume: {:.2} mm^3\n\
         \x20 Estimated Filament Weight: {:.2} g\n\
         \x20 Estimated Filament Cost: ${:.2}\n\
         \x20 Estimated Print Time: {:.2} hours\n\
         \x20 (Note: These are very rough estimates. Use a slicer for accuracy.)\n",
        estimate.total_volume_mm3,
        estimate.total_weight_g,
        estimate.total_cost_usd,
        estimate.print_time_hours
    )
}

/// Render the laser estimate as the plain-text report.
pub fn render_laser_text(estimate: &LaserEstimate) -> String {
    format!(
        "--- Laser Cutting Estimates (Rough) ---\n\
         \x20 Total Material Area: {:.2} mm^2\n\
         \x20 Total Cut Length (approx): {:.2} mm\n\
         \x20 Estimated Acrylic Cost: ${:.2}\n\
         \x20 Estimated Cut Time: {:.2} minutes\n\
         \x20 (Note: These are very rough estimates. Use laser cutter software for accuracy.)\n",
        estimate.total_area_mm2,
        estimate.total_cut_length_mm,
        estimate.total_cost_usd,
        estimate.cut_time_minutes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laser_estimate_reference_values() {
        // Two 150x100 panels, one 150x30, one 100x30.
        let estimate = laser_estimate(&DesignConfig::default());
        assert!((estimate.total_area_mm2 - 37500.0).abs() < 1e-9);
        assert!((estimate.total_cut_length_mm - 2020.0).abs() < 1e-9);
        assert!((estimate.total_cost_usd - 3.75).abs() < 1e-9);
        assert!((estimate.cut_time_minutes - 202.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_print_estimate_is_positive_and_consistent() {
        let estimate = print_estimate(&DesignConfig::default());
        assert!(estimate.total_volume_mm3 > 0.0);
        assert!(
            (estimate.total_weight_g - estimate.total_volume_mm3 * 1.24e-3).abs() < 1e-9
        );
        assert!(
            (estimate.total_cost_usd - estimate.total_weight_g / 1000.0 * 20.0).abs() < 1e-9
        );
        assert!(
            (estimate.print_time_hours - estimate.total_volume_mm3 / 20.0 / 3600.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_more_buttons_reduce_lid_volume() {
        let mut cfg = DesignConfig::default();
        cfg.buttons.count = 3;
        let few = print_estimate(&cfg);
        cfg.buttons.count = 7;
        let many = print_estimate(&cfg);
        assert!(many.total_volume_mm3 < few.total_volume_mm3);
    }

    #[test]
    fn test_render_text_formats_two_decimals() {
        let text = render_laser_text(&laser_estimate(&DesignConfig::default()));
        assert!(text.contains("Total Material Area: 37500.00 mm^2"));
        assert!(text.contains("Estimated Acrylic Cost: $3.75"));
    }
}
