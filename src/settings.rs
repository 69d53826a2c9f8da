//! The key promoter settings entity.
//!
//! Holds the typed configuration read by the popup renderer and edited by
//! the settings UI. Which fields reach disk is declared field-by-field on
//! the struct and honored by the serializer; the three popup colors are
//! runtime-only and revert to their compiled-in defaults on every reload.

use serde::{Deserialize, Serialize};

use crate::template::render_template;
use crate::types::Color;

/// Settings for the key promoter popups.
///
/// Exactly one live instance exists per configuration scope: the host
/// creates it once with [`Default`] values and mutates it in place through
/// the setters. At save and load time the persistence layer exchanges state
/// with it through [`capture_state`](Self::capture_state) and
/// [`restore_state`](Self::restore_state).
///
/// Equality and hashing cover every field, including the transient colors,
/// so a "has anything changed since the dialog opened" comparison sees
/// color edits even though the serializer never writes them. Two instances
/// that compare equal in memory can therefore diverge across a save/reload
/// cycle, which strips the colors back to their defaults.
///
/// Access is expected to be serialized by the host (its UI thread or an
/// external lock); the type itself does no locking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KeyPromoterSettings {
    /// Color of the popup text (runtime-only, not persisted)
    #[serde(skip, default = "crate::defaults::text_color")]
    text_color: Color,

    /// Color of the popup border (runtime-only, not persisted)
    #[serde(skip, default = "crate::defaults::border_color")]
    border_color: Color,

    /// Background color of the popup (runtime-only, not persisted)
    #[serde(skip, default = "crate::defaults::background_color")]
    background_color: Color,

    /// Whether a popup is shown for menu item clicks
    #[serde(default = "crate::defaults::menus_enabled")]
    menus_enabled: bool,

    /// Whether a popup is shown for toolbar button clicks
    #[serde(default = "crate::defaults::toolbar_buttons_enabled")]
    toolbar_buttons_enabled: bool,

    /// Whether a popup is shown for tool-window button clicks
    #[serde(default = "crate::defaults::tool_window_buttons_enabled")]
    tool_window_buttons_enabled: bool,

    /// Whether a popup is shown for every button that has a mnemonic
    #[serde(default = "crate::defaults::all_buttons_enabled")]
    all_buttons_enabled: bool,

    /// How long the popup stays on screen, in milliseconds
    #[serde(default = "crate::defaults::display_time")]
    display_time: u64,

    /// Delay between flash animation steps, in milliseconds
    #[serde(default = "crate::defaults::flash_animation_delay")]
    flash_animation_delay: u64,

    /// Invocation count after which creating a shortcut is proposed for
    /// actions that have none
    #[serde(default = "crate::defaults::propose_to_create_shortcut_count")]
    propose_to_create_shortcut_count: u32,

    /// Whether the popup position is fixed instead of following the mouse
    #[serde(default = "crate::defaults::fixed_tip_position")]
    fixed_tip_position: bool,

    /// Popup body template with positional slots: `{0}` is the action
    /// label, `{1}` the invocation count
    #[serde(default = "crate::defaults::popup_template")]
    popup_template: String,
}

impl Default for KeyPromoterSettings {
    fn default() -> Self {
        Self {
            text_color: crate::defaults::text_color(),
            border_color: crate::defaults::border_color(),
            background_color: crate::defaults::background_color(),
            menus_enabled: crate::defaults::menus_enabled(),
            toolbar_buttons_enabled: crate::defaults::toolbar_buttons_enabled(),
            tool_window_buttons_enabled: crate::defaults::tool_window_buttons_enabled(),
            all_buttons_enabled: crate::defaults::all_buttons_enabled(),
            display_time: crate::defaults::display_time(),
            flash_animation_delay: crate::defaults::flash_animation_delay(),
            propose_to_create_shortcut_count: crate::defaults::propose_to_create_shortcut_count(),
            fixed_tip_position: crate::defaults::fixed_tip_position(),
            popup_template: crate::defaults::popup_template(),
        }
    }
}

impl KeyPromoterSettings {
    /// Snapshot of the full in-memory state, including the transient colors.
    ///
    /// Idempotent: returns the same logical object on every call and never
    /// mutates. Filtering transient fields out of the written form is the
    /// serializer's job, driven by the field markers on the struct.
    pub fn capture_state(&self) -> &Self {
        self
    }

    /// Overwrite every field with the values from `source`.
    ///
    /// Bulk structural copy, not a merge: the transient colors are copied
    /// too, even though a freshly deserialized `source` only ever carries
    /// their compiled-in defaults. After the call, every getter returns the
    /// same value as the corresponding getter on `source`. Values are taken
    /// as-is; range enforcement belongs to the settings UI.
    pub fn restore_state(&mut self, source: &Self) {
        self.text_color = source.text_color;
        self.border_color = source.border_color;
        self.background_color = source.background_color;
        self.menus_enabled = source.menus_enabled;
        self.toolbar_buttons_enabled = source.toolbar_buttons_enabled;
        self.tool_window_buttons_enabled = source.tool_window_buttons_enabled;
        self.all_buttons_enabled = source.all_buttons_enabled;
        self.display_time = source.display_time;
        self.flash_animation_delay = source.flash_animation_delay;
        self.propose_to_create_shortcut_count = source.propose_to_create_shortcut_count;
        self.fixed_tip_position = source.fixed_tip_position;
        self.popup_template = source.popup_template.clone();
    }

    /// Render the popup body for an action: slot `{0}` gets `action_label`,
    /// slot `{1}` gets `press_count`.
    pub fn render_popup(&self, action_label: &str, press_count: u32) -> String {
        render_template(
            &self.popup_template,
            &[action_label, &press_count.to_string()],
        )
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    pub fn menus_enabled(&self) -> bool {
        self.menus_enabled
    }

    pub fn set_menus_enabled(&mut self, enabled: bool) {
        self.menus_enabled = enabled;
    }

    pub fn toolbar_buttons_enabled(&self) -> bool {
        self.toolbar_buttons_enabled
    }

    pub fn set_toolbar_buttons_enabled(&mut self, enabled: bool) {
        self.toolbar_buttons_enabled = enabled;
    }

    pub fn tool_window_buttons_enabled(&self) -> bool {
        self.tool_window_buttons_enabled
    }

    pub fn set_tool_window_buttons_enabled(&mut self, enabled: bool) {
        self.tool_window_buttons_enabled = enabled;
    }

    pub fn all_buttons_enabled(&self) -> bool {
        self.all_buttons_enabled
    }

    pub fn set_all_buttons_enabled(&mut self, enabled: bool) {
        self.all_buttons_enabled = enabled;
    }

    /// How long the popup stays on screen, in milliseconds.
    pub fn display_time(&self) -> u64 {
        self.display_time
    }

    pub fn set_display_time(&mut self, millis: u64) {
        self.display_time = millis;
    }

    pub fn flash_animation_delay(&self) -> u64 {
        self.flash_animation_delay
    }

    pub fn set_flash_animation_delay(&mut self, millis: u64) {
        self.flash_animation_delay = millis;
    }

    pub fn propose_to_create_shortcut_count(&self) -> u32 {
        self.propose_to_create_shortcut_count
    }

    pub fn set_propose_to_create_shortcut_count(&mut self, count: u32) {
        self.propose_to_create_shortcut_count = count;
    }

    pub fn fixed_tip_position(&self) -> bool {
        self.fixed_tip_position
    }

    pub fn set_fixed_tip_position(&mut self, fixed: bool) {
        self.fixed_tip_position = fixed;
    }

    pub fn popup_template(&self) -> &str {
        &self.popup_template
    }

    pub fn set_popup_template(&mut self, template: impl Into<String>) {
        self.popup_template = template.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(settings: &KeyPromoterSettings) -> u64 {
        let mut hasher = DefaultHasher::new();
        settings.hash(&mut hasher);
        hasher.finish()
    }

    fn modified(change: impl FnOnce(&mut KeyPromoterSettings)) -> KeyPromoterSettings {
        let mut settings = KeyPromoterSettings::default();
        change(&mut settings);
        settings
    }

    /// A settings instance with every field changed away from its default.
    fn fully_changed() -> KeyPromoterSettings {
        let mut s = KeyPromoterSettings::default();
        s.set_text_color(Color::new(10, 20, 30));
        s.set_border_color(Color::new(40, 50, 60));
        s.set_background_color(Color::new(70, 80, 90));
        s.set_menus_enabled(false);
        s.set_toolbar_buttons_enabled(false);
        s.set_tool_window_buttons_enabled(false);
        s.set_all_buttons_enabled(true);
        s.set_display_time(5000);
        s.set_flash_animation_delay(200);
        s.set_propose_to_create_shortcut_count(7);
        s.set_fixed_tip_position(true);
        s.set_popup_template("{0} pressed {1} time(s)");
        s
    }

    #[test]
    fn test_every_field_participates_in_equality() {
        let base = KeyPromoterSettings::default();
        let variants = [
            modified(|s| s.set_text_color(Color::new(1, 2, 3))),
            modified(|s| s.set_border_color(Color::new(1, 2, 3))),
            modified(|s| s.set_background_color(Color::new(1, 2, 3))),
            modified(|s| s.set_menus_enabled(false)),
            modified(|s| s.set_toolbar_buttons_enabled(false)),
            modified(|s| s.set_tool_window_buttons_enabled(false)),
            modified(|s| s.set_all_buttons_enabled(true)),
            modified(|s| s.set_display_time(1)),
            modified(|s| s.set_flash_animation_delay(1)),
            modified(|s| s.set_propose_to_create_shortcut_count(1)),
            modified(|s| s.set_fixed_tip_position(true)),
            modified(|s| s.set_popup_template("{0}")),
        ];
        for variant in &variants {
            assert_ne!(variant, &base);
        }
    }

    #[test]
    fn test_equal_instances_hash_equal() {
        let a = KeyPromoterSettings::default();
        let b = KeyPromoterSettings::default();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = fully_changed();
        let d = fully_changed();
        assert_eq!(c, d);
        assert_eq!(hash_of(&c), hash_of(&d));
    }

    #[test]
    fn test_restore_state_copies_every_field() {
        let source = fully_changed();
        let mut target = KeyPromoterSettings::default();
        target.restore_state(&source);

        assert_eq!(target, source);
        assert_eq!(target.text_color(), source.text_color());
        assert_eq!(target.border_color(), source.border_color());
        assert_eq!(target.background_color(), source.background_color());
        assert_eq!(target.menus_enabled(), source.menus_enabled());
        assert_eq!(
            target.toolbar_buttons_enabled(),
            source.toolbar_buttons_enabled()
        );
        assert_eq!(
            target.tool_window_buttons_enabled(),
            source.tool_window_buttons_enabled()
        );
        assert_eq!(target.all_buttons_enabled(), source.all_buttons_enabled());
        assert_eq!(target.display_time(), source.display_time());
        assert_eq!(
            target.flash_animation_delay(),
            source.flash_animation_delay()
        );
        assert_eq!(
            target.propose_to_create_shortcut_count(),
            source.propose_to_create_shortcut_count()
        );
        assert_eq!(target.fixed_tip_position(), source.fixed_tip_position());
        assert_eq!(target.popup_template(), source.popup_template());
    }

    #[test]
    fn test_capture_state_is_idempotent() {
        let settings = fully_changed();
        let first = settings.capture_state().clone();
        let second = settings.capture_state().clone();
        assert_eq!(first, second);
        assert_eq!(first, settings);
    }

    #[test]
    fn test_display_time_capture_restore_scenario() {
        let mut first = KeyPromoterSettings::default();
        assert_eq!(first.display_time(), 3000);

        first.set_display_time(5000);
        assert_eq!(first.display_time(), 5000);

        let mut second = KeyPromoterSettings::default();
        second.restore_state(first.capture_state());
        assert_eq!(second.display_time(), 5000);
    }

    #[test]
    fn test_render_popup_substitutes_both_slots() {
        let settings = KeyPromoterSettings::default();
        let body = settings.render_popup("Copy", 5);

        let label_pos = body.find("Copy").expect("label must be substituted");
        let count_pos = body.find("5 time(s)").expect("count must be substituted");
        assert!(label_pos < count_pos);
        assert!(!body.contains("{0}"));
        assert!(!body.contains("{1}"));
    }

    #[test]
    fn test_render_popup_uses_current_template() {
        let mut settings = KeyPromoterSettings::default();
        settings.set_popup_template("{0}: {1}");
        assert_eq!(settings.render_popup("Paste", 12), "Paste: 12");
    }
}
