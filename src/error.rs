//! Typed error variants for the key-promoter-config crate.
//!
//! Structured errors for settings file I/O, exposed so callers at the crate
//! boundary can match on specific failure modes instead of opaque `anyhow`
//! strings. `load` and `save` return `anyhow::Result`; `SettingsError`
//! values are coerced via the `From` impl that `anyhow` provides for any
//! `std::error::Error` and can be recovered with `downcast_ref`.
//!
//! # Example
//!
//! ```rust,no_run
//! use key_promoter_config::SettingsError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(err) = e.downcast_ref::<SettingsError>() {
//!         match err {
//!             SettingsError::Io(io) => eprintln!("I/O error: {io}"),
//!             SettingsError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading or saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred reading or writing the settings file.
    #[error("settings file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in settings file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}
