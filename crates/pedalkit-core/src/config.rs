//! Design configuration for the footswitch keyboard project.
//!
//! Every generator in the workspace reads from one immutable [`DesignConfig`]
//! value that is passed explicitly into each calculator and emitter call.
//! Nothing reads ambient global state; changing one value here and rerunning
//! the generators is the intended iteration workflow for the physical design.
//!
//! Configuration is organized into logical sections:
//! - Firmware parameters (pins, debounce, device names, macros)
//! - Case envelope and per-feature hole specs
//! - Fastening specs (screws, standoffs, lid assembly)
//! - Estimating rates (material cost, machine speed)
//! - Rendering parameters (camera, image size)
//!
//! All lengths are millimeters. Defaults describe the reference build: a
//! LOLIN S3 Mini board in a 150x100x30 case with seven footswitches.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Firmware GPIO pin assignments, one per button function plus the LED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinAssignments {
    /// Enter key footswitch.
    pub enter: u8,
    /// Escape key footswitch.
    pub esc: u8,
    /// Page-up footswitch.
    pub page_up: u8,
    /// Page-down footswitch.
    pub page_down: u8,
    /// First macro footswitch.
    pub macro_1: u8,
    /// Second macro footswitch.
    pub macro_2: u8,
    /// Third macro footswitch.
    pub macro_3: u8,
    /// Status LED (LED_BUILTIN on the LOLIN S3 Mini).
    pub led: u8,
}

impl Default for PinAssignments {
    fn default() -> Self {
        Self {
            enter: 4,
            esc: 5,
            page_up: 6,
            page_down: 7,
            macro_1: 8,
            macro_2: 9,
            macro_3: 10,
            led: 2,
        }
    }
}

/// Firmware parameters mirrored into the generated C header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirmwareSettings {
    /// GPIO pin assignments.
    pub pins: PinAssignments,
    /// Button debounce interval in milliseconds.
    pub debounce_ms: u32,
    /// BLE keyboard advertising name.
    pub ble_keyboard_name: String,
    /// BLE mouse advertising name.
    pub ble_mouse_name: String,
    /// Text emitted by the three macro buttons.
    pub macro_outputs: [String; 3],
}

impl Default for FirmwareSettings {
    fn default() -> Self {
        Self {
            pins: PinAssignments::default(),
            debounce_ms: 50,
            ble_keyboard_name: "ESP32-S3 Keyboard".to_string(),
            ble_mouse_name: "ESP32-S3 Mouse".to_string(),
            macro_outputs: [
                "Macro 1 Output".to_string(),
                "Macro 2 Output".to_string(),
                "Macro 3 Output".to_string(),
            ],
        }
    }
}

/// Overall case envelope, shared by both enclosure variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseEnvelope {
    /// Overall length of the case (x axis).
    pub length: f64,
    /// Overall width of the case (y axis).
    pub width: f64,
    /// Overall height of the case (z axis).
    pub height: f64,
    /// Wall thickness for the 3D-printed variant.
    pub wall_thickness: f64,
    /// Acrylic sheet thickness for the laser-cut variant.
    pub material_thickness: f64,
}

impl CaseEnvelope {
    /// Height of the base part's walls. The lid walls overlap these.
    pub fn lower_wall_height(&self) -> f64 {
        self.height / 2.0 - self.wall_thickness / 2.0
    }

    /// Height of the lid part's walls.
    pub fn upper_wall_height(&self) -> f64 {
        self.height / 2.0 + self.wall_thickness / 2.0
    }
}

impl Default for CaseEnvelope {
    fn default() -> Self {
        Self {
            length: 150.0,
            width: 100.0,
            height: 30.0,
            wall_thickness: 2.0,
            material_thickness: 3.0,
        }
    }
}

/// Mounting-board envelope (LOLIN S3 Mini by default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardEnvelope {
    /// Board length.
    pub length: f64,
    /// Board width.
    pub width: f64,
    /// Approximate PCB thickness.
    pub thickness: f64,
}

impl Default for BoardEnvelope {
    fn default() -> Self {
        Self {
            length: 34.3,
            width: 25.4,
            thickness: 3.0,
        }
    }
}

/// Footswitch mounting specs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootswitchSpec {
    /// Diameter of the mounting hole.
    pub mount_diameter: f64,
    /// Diameter of the switch cap, used for spacing the row.
    pub cap_diameter: f64,
    /// Depth required for the switch body inside the case.
    pub depth: f64,
}

impl Default for FootswitchSpec {
    fn default() -> Self {
        Self {
            mount_diameter: 12.0,
            cap_diameter: 16.0,
            depth: 20.0,
        }
    }
}

/// Small-button specs and the button/GPIO inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSpec {
    /// Diameter of the hole for the small buttons.
    pub hole_diameter: f64,
    /// Spacing between adjacent buttons.
    pub spacing: f64,
    /// Number of buttons; must equal `gpio_pins.len()`.
    pub count: usize,
    /// GPIO pin for each button, in row order.
    pub gpio_pins: Vec<u8>,
}

impl Default for ButtonSpec {
    fn default() -> Self {
        Self {
            hole_diameter: 6.0,
            spacing: 15.0,
            count: 7,
            gpio_pins: vec![4, 5, 6, 7, 8, 9, 10],
        }
    }
}

/// USB-C port cutout dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsbPortSpec {
    /// Cutout width.
    pub width: f64,
    /// Cutout height.
    pub height: f64,
    /// Connector depth inside the case.
    pub depth: f64,
    /// Offset from the bottom edge of the side panel (laser-cut variant).
    pub offset_from_bottom: f64,
}

impl Default for UsbPortSpec {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 5.0,
            depth: 7.0,
            offset_from_bottom: 5.0,
        }
    }
}

/// Status LED hole specs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedSpec {
    /// Diameter of the LED hole.
    pub hole_diameter: f64,
    /// Offset from the panel edge along x.
    pub offset_x: f64,
    /// Offset from the panel edge along y.
    pub offset_y: f64,
}

impl Default for LedSpec {
    fn default() -> Self {
        Self {
            hole_diameter: 3.0,
            offset_x: 10.0,
            offset_y: 10.0,
        }
    }
}

/// Board standoff specs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandoffSpec {
    /// Standoff post diameter.
    pub diameter: f64,
    /// Standoff height above the case floor.
    pub height: f64,
    /// Screw hole diameter (M2.5 clearance).
    pub screw_diameter: f64,
    /// Distance from the board edge to each mounting hole center.
    pub offset_from_edge: f64,
}

impl Default for StandoffSpec {
    fn default() -> Self {
        Self {
            diameter: 4.0,
            height: 5.0,
            screw_diameter: 2.5,
            offset_from_edge: 5.0,
        }
    }
}

/// Lid assembly and case screw specs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LidSpec {
    /// How much the lid walls overlap the base walls.
    pub overlap: f64,
    /// Screw clearance diameter (M3 with clearance).
    pub screw_diameter: f64,
    /// Screw head diameter, also the lid-screw standoff diameter.
    pub screw_head_diameter: f64,
    /// Depth of the blind screw hole in the base below the standoff.
    pub screw_hole_depth: f64,
    /// Height of the lid-screw standoffs in the base.
    pub standoff_height: f64,
    /// Distance from the inner corner to each screw hole center.
    pub screw_offset: f64,
}

impl Default for LidSpec {
    fn default() -> Self {
        Self {
            overlap: 5.0,
            screw_diameter: 3.2,
            screw_head_diameter: 6.0,
            screw_hole_depth: 5.0,
            standoff_height: 5.0,
            screw_offset: 5.0,
        }
    }
}

/// Finger joint parameters for the laser-cut panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerJointSpec {
    /// Size of each finger along the joint.
    pub joint_size: f64,
}

impl Default for FingerJointSpec {
    fn default() -> Self {
        Self { joint_size: 10.0 }
    }
}

/// Material cost and machine speed rates used by the estimate reports.
///
/// These are deliberately rough; a slicer or laser-cutter software gives
/// accurate numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatingRates {
    /// PLA density in g/mm^3.
    pub filament_density_g_mm3: f64,
    /// Filament cost per kilogram in USD.
    pub filament_cost_per_kg: f64,
    /// Average printing speed in mm^3/s.
    pub printing_speed_mm3_s: f64,
    /// Infill fraction for the 3D-printed shells (0.0..=1.0).
    pub infill: f64,
    /// Average laser cutting speed in mm/s.
    pub laser_cut_speed_mm_s: f64,
    /// Acrylic sheet cost per mm^2 in USD.
    pub acrylic_cost_per_mm2: f64,
}

impl Default for EstimatingRates {
    fn default() -> Self {
        Self {
            filament_density_g_mm3: 1.24e-3,
            filament_cost_per_kg: 20.0,
            printing_speed_mm3_s: 20.0,
            infill: 0.20,
            laser_cut_speed_mm_s: 10.0,
            acrylic_cost_per_mm2: 0.0001,
        }
    }
}

/// Preview rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// OpenSCAD camera position (`translate_x,y,z,rot_x,y,z,distance`).
    pub camera: String,
    /// Width of the generated preview images in pixels.
    pub image_width: u32,
    /// Height of the generated preview images in pixels.
    pub image_height: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            camera: "0,0,0,45,0,45,100".to_string(),
            image_width: 800,
            image_height: 600,
        }
    }
}

/// The complete design configuration.
///
/// Immutable once constructed; every generator receives it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DesignConfig {
    /// Human-readable project name.
    pub project_name: ProjectName,
    /// Firmware parameters.
    pub firmware: FirmwareSettings,
    /// Overall case envelope.
    pub case: CaseEnvelope,
    /// Mounting-board envelope.
    pub board: BoardEnvelope,
    /// Footswitch mounting specs.
    pub footswitch: FootswitchSpec,
    /// Small-button specs and GPIO inventory.
    pub buttons: ButtonSpec,
    /// USB-C port cutout.
    pub usb: UsbPortSpec,
    /// Status LED hole.
    pub led: LedSpec,
    /// Board standoffs.
    pub standoffs: StandoffSpec,
    /// Lid assembly screws.
    pub lid: LidSpec,
    /// Finger joints for the laser-cut panels.
    pub joints: FingerJointSpec,
    /// Estimating rates.
    pub estimating: EstimatingRates,
    /// Preview rendering.
    pub rendering: RenderSettings,
}

/// Newtype for the project name so the top-level config can derive `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(pub String);

impl Default for ProjectName {
    fn default() -> Self {
        Self("ESP32-S3 Dual-Mode HID".to_string())
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DesignConfig {
    /// Load a configuration from a TOML file.
    ///
    /// Fields missing from the file fall back to their defaults, so a config
    /// file only needs to list the values it overrides.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), "Loaded design configuration");
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml(&self) -> String {
        // DesignConfig contains only TOML-representable types.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Total width of the footswitch row: caps plus the gaps between them.
    pub fn footswitch_row_width(&self) -> f64 {
        let n = self.buttons.count as f64;
        n * self.footswitch.cap_diameter + (n - 1.0) * self.buttons.spacing
    }

    /// Validate the geometric parameter set before any layout runs.
    ///
    /// The layout calculator does not clamp or error on overflow, so this
    /// must pass before computing directives for either enclosure variant.
    pub fn validate_geometry(&self) -> ConfigResult<()> {
        let dims: [(&'static str, f64); 22] = [
            ("case.length", self.case.length),
            ("case.width", self.case.width),
            ("case.height", self.case.height),
            ("case.wall_thickness", self.case.wall_thickness),
            ("case.material_thickness", self.case.material_thickness),
            ("board.length", self.board.length),
            ("board.width", self.board.width),
            ("board.thickness", self.board.thickness),
            ("footswitch.mount_diameter", self.footswitch.mount_diameter),
            ("footswitch.cap_diameter", self.footswitch.cap_diameter),
            ("footswitch.depth", self.footswitch.depth),
            ("buttons.hole_diameter", self.buttons.hole_diameter),
            ("buttons.spacing", self.buttons.spacing),
            ("usb.width", self.usb.width),
            ("usb.height", self.usb.height),
            ("usb.depth", self.usb.depth),
            ("led.hole_diameter", self.led.hole_diameter),
            ("standoffs.diameter", self.standoffs.diameter),
            ("standoffs.height", self.standoffs.height),
            ("lid.screw_diameter", self.lid.screw_diameter),
            ("lid.screw_head_diameter", self.lid.screw_head_diameter),
            ("joints.joint_size", self.joints.joint_size),
        ];
        for (name, value) in dims {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }

        if self.buttons.count == 0 {
            return Err(ConfigError::NonPositiveDimension {
                name: "buttons.count",
                value: 0.0,
            });
        }

        let required = self.footswitch_row_width();
        if required > self.case.length {
            return Err(ConfigError::RowOverflow {
                feature: "Footswitch",
                required,
                available: self.case.length,
            });
        }

        if self.usb.width > self.case.length {
            return Err(ConfigError::CutoutDoesNotFit {
                name: "usb",
                reason: format!(
                    "width {}mm exceeds case length {}mm",
                    self.usb.width, self.case.length
                ),
            });
        }
        if self.usb.offset_from_bottom + self.usb.height > self.case.height {
            return Err(ConfigError::CutoutDoesNotFit {
                name: "usb",
                reason: format!(
                    "top edge at {}mm exceeds case height {}mm",
                    self.usb.offset_from_bottom + self.usb.height,
                    self.case.height
                ),
            });
        }

        Ok(())
    }

    /// Validate the electrical parameter set (button/pin inventory).
    pub fn validate_electrical(&self) -> ConfigResult<()> {
        if self.buttons.count != self.buttons.gpio_pins.len() {
            return Err(ConfigError::PinCountMismatch {
                num_buttons: self.buttons.count,
                pins: self.buttons.gpio_pins.len(),
            });
        }
        Ok(())
    }

    /// Run all validation checks.
    pub fn validate(&self) -> ConfigResult<()> {
        self.validate_geometry()?;
        self.validate_electrical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A config whose footswitch row actually fits the default case.
    fn fitting_config() -> DesignConfig {
        let mut cfg = DesignConfig::default();
        cfg.buttons.count = 5;
        cfg.buttons.gpio_pins = vec![4, 5, 6, 7, 8];
        cfg.buttons.spacing = 10.0;
        cfg
    }

    #[test]
    fn test_default_values_match_reference_build() {
        let cfg = DesignConfig::default();
        assert_eq!(cfg.case.length, 150.0);
        assert_eq!(cfg.case.width, 100.0);
        assert_eq!(cfg.case.height, 30.0);
        assert_eq!(cfg.case.wall_thickness, 2.0);
        assert_eq!(cfg.case.material_thickness, 3.0);
        assert_eq!(cfg.board.length, 34.3);
        assert_eq!(cfg.footswitch.cap_diameter, 16.0);
        assert_eq!(cfg.buttons.count, 7);
        assert_eq!(cfg.buttons.gpio_pins, vec![4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(cfg.lid.screw_diameter, 3.2);
        assert_eq!(cfg.firmware.pins.led, 2);
        assert_eq!(cfg.firmware.debounce_ms, 50);
    }

    #[test]
    fn test_wall_heights() {
        let case = CaseEnvelope::default();
        assert_eq!(case.lower_wall_height(), 14.0);
        assert_eq!(case.upper_wall_height(), 16.0);
    }

    #[test]
    fn test_default_footswitch_row_overflows() {
        // 7 * 16 + 6 * 15 = 202mm in a 150mm case. The reference parameters
        // carry this latent overflow; validation must surface it.
        let cfg = DesignConfig::default();
        assert_eq!(cfg.footswitch_row_width(), 202.0);
        let err = cfg.validate_geometry().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RowOverflow {
                feature: "Footswitch",
                ..
            }
        ));
    }

    #[test]
    fn test_fitting_config_validates() {
        let cfg = fitting_config();
        assert_eq!(cfg.footswitch_row_width(), 120.0);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_pin_count_mismatch() {
        let mut cfg = fitting_config();
        cfg.buttons.gpio_pins.pop();
        let err = cfg.validate_electrical().unwrap_err();
        assert!(matches!(err, ConfigError::PinCountMismatch { num_buttons: 5, pins: 4 }));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let mut cfg = fitting_config();
        cfg.case.wall_thickness = -1.0;
        let err = cfg.validate_geometry().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositiveDimension {
                name: "case.wall_thickness",
                ..
            }
        ));
    }

    #[test]
    fn test_usb_cutout_must_fit() {
        let mut cfg = fitting_config();
        cfg.usb.offset_from_bottom = 28.0;
        let err = cfg.validate_geometry().unwrap_err();
        assert!(matches!(err, ConfigError::CutoutDoesNotFit { name: "usb", .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = fitting_config();
        let text = cfg.to_toml();
        let parsed: DesignConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let text = "[case]\nlength = 200.0\nwidth = 100.0\nheight = 30.0\nwall_thickness = 2.0\nmaterial_thickness = 3.0\n";
        let cfg: DesignConfig = toml::from_str(text).unwrap();
        assert_eq!(cfg.case.length, 200.0);
        // Everything else keeps its default.
        assert_eq!(cfg.buttons.count, 7);
        assert_eq!(cfg.firmware.debounce_ms, 50);
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedalkit.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[buttons]").unwrap();
        writeln!(file, "hole_diameter = 6.0").unwrap();
        writeln!(file, "spacing = 12.0").unwrap();
        writeln!(file, "count = 3").unwrap();
        writeln!(file, "gpio_pins = [4, 5, 6]").unwrap();
        drop(file);

        let cfg = DesignConfig::load(&path).unwrap();
        assert_eq!(cfg.buttons.count, 3);
        assert_eq!(cfg.buttons.spacing, 12.0);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = DesignConfig::load("/nonexistent/pedalkit.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
