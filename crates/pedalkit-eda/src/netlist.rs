//! KiCad netlist generation for the button daughterboard.
//!
//! Emits a legacy s-expression netlist (`export (version D)`) describing
//! one 1xN pin header and the configured push buttons. Each button's pin 1
//! goes to its own header pin; every pin 2 shares the GND net on the last
//! header pin.
//!
//! The design date and tstamps are fixed so the output is reproducible.

use pedalkit_core::DesignConfig;
use std::fmt::Write;

const DESIGN_DATE: &str = "2023-10-27T10:00:00Z";

/// Render the KiCad netlist for the configured button count.
pub fn button_netlist(config: &DesignConfig) -> String {
    let num_buttons = config.buttons.count;
    let header_pins = num_buttons + 1;

    let mut out = String::new();
    out.push_str("(export (version D)\n");
    out.push_str("  (design\n");
    out.push_str("    (source \"button_pcb.kicad_sch\")\n");
    let _ = writeln!(out, "    (date \"{}\")", DESIGN_DATE);
    out.push_str("    (tool \"script_generator\")\n");
    out.push_str("  )\n");
    out.push_str("  (components\n");

    // ESP32 connector: generic single-row pin header.
    out.push_str("    (comp (ref J1)\n");
    let _ = writeln!(out, "      (value Conn_01x{:02})", header_pins);
    let _ = writeln!(
        out,
        "      (footprint Connector_PinHeader_2.54mm:PinHeader_1x{:02}_P2.54mm)",
        header_pins
    );
    let _ = writeln!(
        out,
        "      (libsource (lib Connector_Generic) (part Conn_01x{:02}) (description \"Generic connector, single row, 01x{:02}, script generated\"))",
        header_pins, header_pins
    );
    out.push_str("      (sheetpath (names /) (tstamps /))\n");
    out.push_str("      (tstamp 00000000)\n");
    out.push_str("    )\n");

    for i in 1..=num_buttons {
        let _ = writeln!(out, "    (comp (ref SW{})", i);
        out.push_str("      (value SW_Push)\n");
        out.push_str("      (footprint Button_SMD_6x6mm:SW_Push_6mm)\n");
        out.push_str(
            "      (libsource (lib Button) (part SW_Push) (description \"Push button switch, generic, script generated\"))\n",
        );
        out.push_str("      (sheetpath (names /) (tstamps /))\n");
        let _ = writeln!(out, "      (tstamp {:08})", i);
        out.push_str("    )\n");
    }

    out.push_str("  )\n");
    out.push_str("  (nets\n");

    for i in 1..=num_buttons {
        let _ = writeln!(out, "    (net (code {})", i);
        let _ = writeln!(out, "      (name \"Net-(J1-Pad{})\")", i);
        let _ = writeln!(out, "      (node (ref J1) (pin {}))", i);
        let _ = writeln!(out, "      (node (ref SW{}) (pin 1))", i);
        out.push_str("    )\n");
    }

    let _ = writeln!(out, "    (net (code {})", header_pins);
    out.push_str("      (name \"GND\")\n");
    let _ = writeln!(out, "      (node (ref J1) (pin {}))", header_pins);
    for i in 1..=num_buttons {
        let _ = writeln!(out, "      (node (ref SW{}) (pin 2))", i);
    }
    out.push_str("    )\n");

    out.push_str("  )\n");
    out.push_str(")\n");

    tracing::debug!(buttons = num_buttons, "Rendered button netlist");
    out
}
