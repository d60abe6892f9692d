//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Missing fields take their defaults,
//! and a missing or broken file falls back to [`Settings::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_MS;
use crate::tuning::{Tuning, TuningError};

/// Errors raised while reading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(#[from] TuningError),

    #[error("tick_ms must be positive")]
    ZeroTick,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frame duration in milliseconds
    pub tick_ms: u64,
    /// Fixed RNG seed; `None` seeds from system entropy
    pub seed: Option<u64>,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming an explicit settings file
    pub const PATH_ENV: &'static str = "FLAPPY_SETTINGS";
    /// Environment variable overriding the log file location
    pub const LOG_FILE_ENV: &'static str = "FLAPPY_LOG_FILE";
    /// Settings file looked up in the working directory
    const DEFAULT_PATH: &'static str = "flappy.json";
    const DEFAULT_LOG_FILE: &'static str = "flappy-rect.log";

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::ZeroTick);
        }
        self.tuning.validate()?;
        Ok(())
    }

    /// Settings file to read, if any: `$FLAPPY_SETTINGS`, else `flappy.json`
    /// when it exists
    pub fn resolve_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        let default = PathBuf::from(Self::DEFAULT_PATH);
        default.exists().then_some(default)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load() -> Self {
        match Self::resolve_path() {
            Some(path) => match Self::from_file(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("{e}; using default settings");
                    Self::default()
                }
            },
            None => {
                log::debug!("No settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Log file for the binary: `$FLAPPY_LOG_FILE`, else `flappy-rect.log`.
    /// Resolved before settings are read so loading itself gets logged.
    pub fn log_path() -> PathBuf {
        std::env::var_os(Self::LOG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_tuning_override() {
        let json = r#"{ "tick_ms": 33, "seed": 7, "tuning": { "pipe_speed": 5 } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.tick_ms, 33);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.pipe_speed, 5);
        assert_eq!(settings.tuning.pipe_gap, Tuning::default().pipe_gap);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ tick_ms: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let json = r#"{ "tuning": { "pipe_gap": 1000 } }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(TuningError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = Settings::from_json(r#"{ "tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::ZeroTick));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::from_file(Path::new("/nonexistent/flappy.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
