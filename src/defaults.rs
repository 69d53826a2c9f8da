//! Default value functions for the key promoter settings.
//!
//! Each free function supplies the compiled-in default for one field and is
//! referenced both from `impl Default for KeyPromoterSettings` and from the
//! `#[serde(default = "crate::defaults::...")]` attributes on the struct, so
//! a settings file with missing keys always fills in the same values a fresh
//! instance starts with.

use crate::types::Color;

// Popup colors. These fields are transient, so every reload lands back on
// these values no matter what the user picked last session.

pub fn text_color() -> Color {
    Color::new(0, 0, 0) // Black
}

pub fn border_color() -> Color {
    Color::new(255, 0, 0) // Red
}

pub fn background_color() -> Color {
    Color::from_rgb(0x202040) // Dark navy
}

// Popup triggers

pub fn menus_enabled() -> bool {
    true
}

pub fn toolbar_buttons_enabled() -> bool {
    true
}

pub fn tool_window_buttons_enabled() -> bool {
    true
}

pub fn all_buttons_enabled() -> bool {
    false
}

// Timing

pub fn display_time() -> u64 {
    3000
}

pub fn flash_animation_delay() -> u64 {
    150
}

// Shortcut proposal

pub fn propose_to_create_shortcut_count() -> u32 {
    3
}

// Popup placement and content

pub fn fixed_tip_position() -> bool {
    false
}

/// The built-in popup body. Slot `{0}` is the action label, slot `{1}` the
/// invocation count.
pub fn popup_template() -> String {
    r#"<html>
 <body>
  <table>
   <tr>
    <td align="center"><font size=8>{0}</font></td>
   </tr>
   <tr>
    <td align="center"><font size=6>{1} time(s)</font></td>
   </tr>
  </table>
 </body>
</html>"#
        .to_string()
}
