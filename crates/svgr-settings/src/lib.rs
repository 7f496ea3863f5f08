//! svgr Settings Crate
//!
//! Conversion settings with JSON/TOML persistence and validation.

pub mod config;
pub mod error;

pub use config::{ConversionSettings, SettingsFormat, SETTINGS_FILE_NAME};
pub use error::{Result, SettingsError};
