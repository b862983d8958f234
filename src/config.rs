//! User configuration loaded from `~/.config/scicalc/config.toml`.
//!
//! Every field is optional; a missing file means defaults.
//!
//! ```toml
//! start_mode = "scientific"
//!
//! [window]
//! width = 430
//! height = 600
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::layout::Mode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Keypad shown when the calculator starts.
    pub start_mode: Mode,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl WindowConfig {
    pub const MIN_WIDTH: f32 = 280.0;
    pub const MIN_HEIGHT: f32 = 400.0;

    /// Width and height clamped to a usable minimum.
    pub fn size(&self) -> (f32, f32) {
        (
            self.width.max(Self::MIN_WIDTH),
            self.height.max(Self::MIN_HEIGHT),
        )
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 430.0,
            height: 600.0,
        }
    }
}

impl Config {
    /// Default location of the config file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scicalc").join("config.toml"))
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loaded config");
                Self::from_toml(&text, path)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load the config from the default location, falling back to defaults
    /// with a warning if it cannot be read.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        Self::load_from(&path).unwrap_or_else(|err| {
            warn!("{err}, using defaults");
            Self::default()
        })
    }
}
