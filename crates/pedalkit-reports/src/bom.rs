//! Bill of materials.
//!
//! The BOM is derived from the design configuration, so changing the button
//! count or standoff heights updates the quantities and notes without
//! touching this module.

use pedalkit_core::DesignConfig;
use serde::Serialize;
use std::fmt;

/// A BOM quantity: either a discrete count or free-form text such as
/// "~2 meters".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(u32),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{}", n),
            Quantity::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One line of the bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomItem {
    pub name: String,
    pub quantity: Quantity,
    pub notes: String,
}

impl BomItem {
    fn count(name: &str, quantity: u32, notes: String) -> Self {
        Self {
            name: name.to_string(),
            quantity: Quantity::Count(quantity),
            notes,
        }
    }

    fn text(name: &str, quantity: &str, notes: String) -> Self {
        Self {
            name: name.to_string(),
            quantity: Quantity::Text(quantity.to_string()),
            notes,
        }
    }
}

/// Build the bill of materials for the configured design.
pub fn bill_of_materials(config: &DesignConfig) -> Vec<BomItem> {
    vec![
        BomItem::count(
            "ESP32-S3 LOLIN S3 Mini",
            1,
            "Main microcontroller board".to_string(),
        ),
        BomItem::count(
            "Momentary Footswitches",
            config.buttons.count as u32,
            "For keyboard/mouse inputs".to_string(),
        ),
        BomItem::count(
            "M3 Screws (for case assembly)",
            4,
            format!(
                "Length depends on lid standoff height ({}mm) + wall thickness ({}mm)",
                config.lid.standoff_height, config.case.wall_thickness
            ),
        ),
        BomItem::count(
            "M2.5 or M3 Screws (for board mounting)",
            4,
            format!(
                "Length depends on board standoff height ({}mm)",
                config.standoffs.height
            ),
        ),
        BomItem::text(
            "Wires",
            "~2 meters",
            "For connecting buttons to ESP32".to_string(),
        ),
        BomItem::text(
            "Acrylic Sheet (for laser cut case)",
            "See material usage",
            format!("Thickness: {}mm", config.case.material_thickness),
        ),
        BomItem::text(
            "PLA/PETG Filament (for 3D printed case)",
            "See material usage",
            String::new(),
        ),
    ]
}

/// Render the BOM as the plain-text report.
pub fn render_text(items: &[BomItem]) -> String {
    let mut out = String::from("--- Bill of Materials ---\n");
    for item in items {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            item.name, item.quantity, item.notes
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_has_seven_lines() {
        let items = bill_of_materials(&DesignConfig::default());
        assert_eq!(items.len(), 7);
        assert_eq!(items[0].quantity, Quantity::Count(1));
    }

    #[test]
    fn test_footswitch_quantity_tracks_button_count() {
        let mut cfg = DesignConfig::default();
        cfg.buttons.count = 5;

        let before = bill_of_materials(&DesignConfig::default());
        let after = bill_of_materials(&cfg);
        assert_eq!(before[1].quantity, Quantity::Count(7));
        assert_eq!(after[1].quantity, Quantity::Count(5));

        // Only the footswitch line changes.
        for (a, b) in before.iter().zip(after.iter()) {
            if a.name != "Momentary Footswitches" {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_notes_reflect_config_values() {
        let cfg = DesignConfig::default();
        let items = bill_of_materials(&cfg);
        assert!(items[2].notes.contains("(5mm)"));
        assert!(items[2].notes.contains("(2mm)"));
        assert!(items[5].notes.contains("3mm"));
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&bill_of_materials(&DesignConfig::default()));
        assert!(text.starts_with("--- Bill of Materials ---\n"));
        assert!(text.contains("- ESP32-S3 LOLIN S3 Mini: 1 (Main microcontroller board)\n"));
        assert!(text.contains("- Wires: ~2 meters (For connecting buttons to ESP32)\n"));
    }
}
