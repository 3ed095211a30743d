//! Optional TOML settings file.
//!
//! ```toml
//! [defaults]
//! crew_size = 4
//! duration_days = 365
//! mission_type = "long-deep-space"
//! recycling_level = "partial"
//!
//! [chart]
//! width = 800
//! height = 480
//!
//! [logging]
//! level = "debug"
//! file = "aerolife.log"
//! ```
//!
//! Every section and key is optional. Consumption rates and recycling
//! fractions are not settable here.

use std::path::{Path, PathBuf};

use aerolife_core::{MissionType, RecyclingLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::form::{DEFAULT_CREW_SIZE, DEFAULT_DURATION_DAYS};

/// Errors that can occur while loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: FormDefaults,
    pub chart: ChartSettings,
    pub logging: LoggingSettings,
}

/// Initial form selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    pub crew_size: u32,
    pub duration_days: u32,
    pub mission_type: MissionType,
    pub recycling_level: RecyclingLevel,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            crew_size: DEFAULT_CREW_SIZE,
            duration_days: DEFAULT_DURATION_DAYS,
            mission_type: MissionType::default(),
            recycling_level: RecyclingLevel::default(),
        }
    }
}

/// SVG chart dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
}

impl ChartSettings {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// EnvFilter directive, e.g. `"debug"` or `"warn,aerolife_ui=debug"`.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Reads and parses the settings file at `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }
}
