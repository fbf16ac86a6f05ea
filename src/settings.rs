//! User settings loaded from the platform config directory.
//!
//! Every field is optional; a missing or malformed file yields defaults.
//! Environment variables override the file for the data and export
//! directories.

use crate::constants::{
    APP_DIR_NAME, DATA_DIR_ENV, DEFAULT_WINDOW_SIZE, EXPORT_DIR_ENV, SETTINGS_FILE_NAME,
};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the persisted board record
    pub data_dir: Option<PathBuf>,
    /// Directory exported boards are written to
    pub export_dir: Option<PathBuf>,
    /// Extra font files for characters the built-in export face lacks
    pub export_fonts: Vec<PathBuf>,
    /// Skip toast fade-out
    pub reduce_motion: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_dir: None,
            export_fonts: Vec::new(),
            reduce_motion: false,
            window_width: DEFAULT_WINDOW_SIZE.0,
            window_height: DEFAULT_WINDOW_SIZE.1,
        }
    }
}

impl Settings {
    /// Load from the default settings path and apply environment overrides.
    pub fn load() -> Self {
        let settings = match settings_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring settings file: {:#}", e);
                Self::default()
            }),
            _ => Self::default(),
        };
        settings.with_env_overrides()
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = env_path(DATA_DIR_ENV) {
            self.data_dir = Some(dir);
        }
        if let Some(dir) = env_path(EXPORT_DIR_ENV) {
            self.export_dir = Some(dir);
        }
        self
    }

    /// Directory for the board record
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(crate::storage::default_data_dir)
    }

    /// Directory for exported images: configured, else Downloads, else cwd
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Path of the settings file, if the platform has a config directory
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
