//! Firmware `config.h` generation.
//!
//! The firmware reads its pin map, debounce interval, BLE names and macro
//! strings from a generated header so the sketch itself never needs
//! editing when the design configuration changes.

use pedalkit_core::DesignConfig;

/// Render the C header consumed by the firmware build.
pub fn config_header(config: &DesignConfig) -> String {
    let fw = &config.firmware;
    let pins = &fw.pins;
    format!(
        "#ifndef CONFIG_H\n\
         #define CONFIG_H\n\
         \n\
         // Auto-generated; regenerate with `pedalkit firmware`\n\
         \n\
         // Firmware Parameters\n\
         #define PIN_ENTER {}\n\
         #define PIN_ESC {}\n\
         #define PIN_PAGE_UP {}\n\
         #define PIN_PAGE_DOWN {}\n\
         #define PIN_MACRO_1 {}\n\
         #define PIN_MACRO_2 {}\n\
         #define PIN_MACRO_3 {}\n\
         #define PIN_LED {}\n\
         \n\
         #define DEBOUNCE_MS {}\n\
         \n\
         #define BLE_KEYBOARD_NAME \"{}\"\n\
         #define BLE_MOUSE_NAME \"{}\"\n\
         \n\
         #define MACRO_1_OUTPUT \"{}\"\n\
         #define MACRO_2_OUTPUT \"{}\"\n\
         #define MACRO_3_OUTPUT \"{}\"\n\
         \n\
         #endif // CONFIG_H\n",
        pins.enter,
        pins.esc,
        pins.page_up,
        pins.page_down,
        pins.macro_1,
        pins.macro_2,
        pins.macro_3,
        pins.led,
        fw.debounce_ms,
        fw.ble_keyboard_name,
        fw.ble_mouse_name,
        fw.macro_outputs[0],
        fw.macro_outputs[1],
        fw.macro_outputs[2],
    )
}
