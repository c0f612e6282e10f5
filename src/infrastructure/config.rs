//! Configuration management

use crate::error::{QuotaryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "quotary";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command used to read quotes aloud
    pub speech_program: String,

    /// Overrides the default quotes file location when set
    pub quotes_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            speech_program: default_speech_program().to_string(),
            quotes_file: None,
        }
    }
}

impl Config {
    /// Load the user configuration from `<config-dir>/quotary/config.toml`.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        if config.speech_program.trim().is_empty() {
            return Err(QuotaryError::Config(
                "speech_program cannot be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}

/// Default OS speech command
fn default_speech_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak"
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
