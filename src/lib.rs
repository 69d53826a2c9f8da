//! Configuration system for the key promoter shortcut-hint popups.
//!
//! This crate provides the settings entity for the key promoter feature:
//! the typed configuration that decides which UI elements trigger a hint
//! popup, how long the popup stays up, and what it looks like. It includes:
//!
//! - The [`KeyPromoterSettings`] entity with per-field defaults
//! - The capture/restore protocol the host uses at save and load time
//! - YAML persistence honoring per-field persisted/transient markers
//! - Positional popup-template rendering
//!
//! The popup renderer and the settings UI are consumers of this crate, not
//! part of it.

pub mod defaults;
mod error;
mod persistence;
mod settings;
mod template;
mod types;

// Re-export main types for convenience
pub use error::SettingsError;
pub use settings::KeyPromoterSettings;
pub use template::render_template;
pub use types::Color;
