//! Conceptual PCB layout report.
//!
//! A plain-text companion to the netlist: approximate board dimensions, a
//! linear button arrangement, and the button-to-GPIO wiring table.

use pedalkit_core::{ConfigError, ConfigResult, DesignConfig};
use std::fmt::Write;

/// Render the conceptual layout report.
///
/// Fails with [`ConfigError::PinCountMismatch`] if the GPIO pin list does
/// not cover every button.
pub fn layout_report(config: &DesignConfig) -> ConfigResult<String> {
    let num_buttons = config.buttons.count;
    let spacing = config.buttons.spacing;
    if config.buttons.gpio_pins.len() != num_buttons {
        return Err(ConfigError::PinCountMismatch {
            num_buttons,
            pins: config.buttons.gpio_pins.len(),
        });
    }

    let mut out = String::from("--- Conceptual Button PCB Layout ---\n\n");
    let _ = writeln!(
        out,
        "Board Dimensions (approx): {}mm x {}mm\n",
        num_buttons as f64 * spacing + spacing,
        spacing * 2.0
    );
    out.push_str("Button Placement (X, Y coordinates from bottom-left corner):\n");
    for i in 0..num_buttons {
        let x = i as f64 * spacing + spacing / 2.0;
        let _ = writeln!(out, "  Button {}: ({:.1}mm, {:.1}mm)", i + 1, x, spacing);
    }

    out.push_str("\nConnections:\n");
    for (i, pin) in config.buttons.gpio_pins.iter().enumerate() {
        let _ = writeln!(
            out,
            "  Button {} -> ESP32 GPIO{} (via connector pin {})",
            i + 1,
            pin,
            i + 1
        );
    }
    let _ = writeln!(
        out,
        "  All Buttons -> ESP32 GND (via connector pin {})",
        num_buttons + 1
    );

    Ok(out)
}
