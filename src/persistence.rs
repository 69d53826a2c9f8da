//! Settings persistence and path resolution for `KeyPromoterSettings`.
//!
//! Covers:
//! - `load` / `save` and the path-taking `load_from` / `save_to` primitives
//!   (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`settings_path`, `settings_dir`)
//!
//! This module plays the host-framework side of the capture/restore
//! protocol: it owns the storage format and location, consults the
//! per-field persisted/transient markers through the serializer, and builds
//! a default instance on first run. The entity itself contains no format
//! code.

use crate::error::SettingsError;
use crate::settings::KeyPromoterSettings;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl KeyPromoterSettings {
    /// Load settings from the default path, creating the default file on
    /// first run.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use key_promoter_config::KeyPromoterSettings;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let mut live = KeyPromoterSettings::default();
    /// let loaded = KeyPromoterSettings::load()?;
    /// live.restore_state(&loaded);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from `path`, creating and saving defaults when the
    /// file does not exist yet.
    ///
    /// Keys missing from the file fall back to their compiled-in defaults;
    /// the transient colors are never read from the file at all.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading existing settings from {:?}", path);
            let contents = fs::read_to_string(path).map_err(SettingsError::Io)?;
            let settings: KeyPromoterSettings =
                serde_yaml_ng::from_str(&contents).map_err(SettingsError::Parse)?;
            Ok(settings)
        } else {
            log::info!("Settings file not found, creating default at {:?}", path);
            let settings = Self::default();
            if let Err(e) = settings.save_to(path) {
                log::error!("Failed to save default settings: {}", e);
                return Err(e);
            }
            Ok(settings)
        }
    }

    /// Save the captured state to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    /// Save the captured state to `path`.
    ///
    /// Fields marked transient on the entity are omitted from the written
    /// form by the serializer.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(SettingsError::Io)?;
        }

        let yaml = serde_yaml_ng::to_string(self.capture_state()).map_err(SettingsError::Parse)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(SettingsError::Io)?;
        fs::rename(&temp_path, path).map_err(SettingsError::Io)?;

        Ok(())
    }

    /// Get the settings file path (using XDG convention)
    pub fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.yaml")
    }

    /// Get the settings directory path (using XDG convention)
    ///
    /// Application-level scope: the file lives under the user's
    /// configuration directory, never under a project.
    pub fn settings_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("key-promoter")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/key-promoter
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("key-promoter")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
