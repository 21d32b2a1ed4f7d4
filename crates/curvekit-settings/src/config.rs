//! Configuration for CurveKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files, chosen by extension.
//!
//! Configuration is organized into logical sections:
//! - Editor behaviour (pick radius)
//! - Canvas dimensions
//! - Drawing style (curve, handles, guides, background)

use std::path::Path;

use serde::{Deserialize, Serialize};

use curvekit_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, PICK_RADIUS};
use curvekit_core::CanvasStyle;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Editor behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum distance, in curve units, at which a press grabs a point
    pub pick_radius: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
        }
    }
}

/// Drawing surface size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// File formats a configuration can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub canvas: CanvasSettings,
    pub style: CanvasStyle,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses config text in the given format and validates it.
    pub fn from_str_as(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config in the given format after validating it.
    pub fn to_string_as(&self, format: ConfigFormat) -> SettingsResult<String> {
        self.validate()?;
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };
        Ok(content)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_str_as(&content, format)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let format = ConfigFormat::from_path(path)?;
        let content = self.to_string_as(format)?;
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        positive("editor.pick_radius", self.editor.pick_radius)?;

        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;

        positive("style.curve_width", self.style.curve_width)?;
        positive("style.handle_radius", self.style.handle_radius)?;
        non_negative("style.handle_stroke_width", self.style.handle_stroke_width)?;
        non_negative("style.guide_width", self.style.guide_width)?;

        Ok(())
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(
            key,
            format!("must be a positive number, got {}", value),
        ))
    }
}

fn non_negative(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(
            key,
            format!("must be zero or more, got {}", value),
        ))
    }
}
