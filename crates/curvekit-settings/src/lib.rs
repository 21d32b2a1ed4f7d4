//! CurveKit Settings Crate
//!
//! Handles application configuration: the editor's pick radius, canvas size
//! and drawing style, loaded from and saved to JSON or TOML files.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{CanvasSettings, Config, ConfigFormat, EditorSettings};
pub use curvekit_core::CanvasStyle;
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
