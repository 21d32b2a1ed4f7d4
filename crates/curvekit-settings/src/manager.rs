//! Settings manager
//!
//! Owns the active [`Config`] and the file it was read from. The default
//! location is `<platform config dir>/curvekit/config.toml`; a missing file
//! means defaults.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "curvekit";
const CONFIG_FILE: &str = "config.toml";

/// Loads, holds and saves the application configuration.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
}

impl SettingsManager {
    /// Platform default config file path.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Opens the config at the platform default location.
    pub fn open_default() -> SettingsResult<Self> {
        Self::open(Self::default_config_path()?)
    }

    /// Opens the config at `path`, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or fails validation is an error.
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let config = if path.exists() {
            Config::load_from_file(&path)?
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Config::default()
        };
        Ok(Self { config, path })
    }

    /// A manager holding `config` that will save to `path`.
    pub fn with_config(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            path: path.into(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the config back, creating the parent directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        self.config.save_to_file(&self.path)
    }

    /// Re-reads the file, keeping the current config if the file is gone.
    pub fn reload(&mut self) -> SettingsResult<()> {
        if self.path.exists() {
            self.config = Config::load_from_file(&self.path)?;
        }
        Ok(())
    }
}
