//! Game settings and preferences
//!
//! Read from a JSON file at startup. Any field may be omitted; missing fields
//! take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highscores::DEFAULT_HIGH_SCORE_PATH;
use crate::tuning::Tuning;

/// Errors from loading a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Storage ===
    /// Text file holding the best score
    pub high_score_path: String,

    // === Run ===
    /// Fixed RNG seed; time-based when absent
    pub seed: Option<u64>,
    /// Length of the headless demo, in ticks
    pub demo_ticks: u64,

    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            high_score_path: DEFAULT_HIGH_SCORE_PATH.to_string(),

            seed: None,
            demo_ticks: 60 * 60,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read a settings file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a settings file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(problem) = self.tuning.problem() {
            return Err(SettingsError::Invalid(problem));
        }
        if self.high_score_path.trim().is_empty() {
            return Err(SettingsError::Invalid("high_score_path is empty".into()));
        }
        Ok(())
    }
}
