//! Conversion settings
//!
//! Settings are stored as JSON or TOML, chosen by file extension. Missing
//! fields take their defaults, so a partial file only overrides what it
//! names.

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use svgr_core::{
    constants::HEADER_SEPARATOR, DEFAULT_FLATTEN_STEP, DEFAULT_WORKERS, MIN_FLATTEN_STEP,
    OUTPUT_MAGIC,
};
use tracing::debug;

/// Name of the settings file inside the platform config directory
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Serialisation format of a settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Toml,
}

impl SettingsFormat {
    /// Format for `path`, by extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Tuning for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Maximum number of parallel chunks
    pub workers: usize,
    /// Curve sampling step in `(0, 1)`
    pub flatten_step: f32,
    /// Use the parallel driver without `--threaded`
    pub threaded: bool,
    /// Magic string written at the start of the output header
    pub magic: String,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            flatten_step: DEFAULT_FLATTEN_STEP,
            threaded: false,
            magic: OUTPUT_MAGIC.to_string(),
        }
    }
}

impl ConversionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = SettingsFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;

        let settings: Self = match format {
            SettingsFormat::Json => serde_json::from_str(&content)?,
            SettingsFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Save settings to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match SettingsFormat::from_path(path)? {
            SettingsFormat::Json => serde_json::to_string_pretty(self)?,
            SettingsFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` when given, otherwise the default settings file if it
    /// exists, otherwise the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Default settings file location under the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("svgr").join(SETTINGS_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(SettingsError::invalid("workers", "must be at least 1"));
        }

        if !self.flatten_step.is_finite()
            || self.flatten_step < MIN_FLATTEN_STEP
            || self.flatten_step >= 1.0
        {
            return Err(SettingsError::invalid(
                "flatten_step",
                format!(
                    "must be at least {MIN_FLATTEN_STEP} and below 1, got {}",
                    self.flatten_step
                ),
            ));
        }

        if self.magic.contains(HEADER_SEPARATOR) {
            return Err(SettingsError::invalid(
                "magic",
                format!("must not contain '{HEADER_SEPARATOR}'"),
            ));
        }

        Ok(())
    }
}
