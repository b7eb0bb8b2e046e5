//! Centralized card options with TOML preset support.
//!
//! All tweakable settings (tilt bounds, smoothing, idle trajectory, flip
//! timing, motion preferences) are consolidated here. Options serialize
//! to/from TOML so a host page can ship presets alongside its assets.

mod flip;
mod idle;
mod motion;
mod tilt;

use std::path::Path;

pub use flip::FlipOptions;
pub use idle::IdleOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tilt::TiltOptions;
use web_time::Duration;

use crate::error::CardError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[tilt]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Tilt bounds and pointer smoothing.
    pub tilt: TiltOptions,
    /// Autonomous idle trajectory.
    pub idle: IdleOptions,
    /// Flip transition timing.
    pub flip: FlipOptions,
    /// Motion preferences.
    pub motion: MotionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CardError> {
        let content = std::fs::read_to_string(path).map_err(CardError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CardError> {
        toml::from_str(content)
            .map_err(|e| CardError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CardError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CardError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CardError::Io)?;
        }
        std::fs::write(path, content).map_err(CardError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Flip lock duration as a [`Duration`].
    #[must_use]
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip.duration_ms)
    }
}
