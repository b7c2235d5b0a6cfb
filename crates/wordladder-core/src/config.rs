//! Global configuration for wordladder (stored in ~/.config/wordladder/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "wordladder";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WORDLADDER_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Lexicon used when `--lexicon` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,

    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    LadderError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            LadderError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded global config");
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| LadderError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            LadderError::Other(format!(
                "failed to create config directory {}: {}",
                config_dir.display(),
                e
            ))
        })?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| LadderError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            LadderError::Other(format!(
                "failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Resolve the lexicon path: an explicit flag wins over the config file.
    pub fn resolve_lexicon(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        match (explicit, &self.lexicon) {
            (Some(path), _) => Ok(path.to_path_buf()),
            (None, Some(path)) => Ok(path.clone()),
            (None, None) => Err(LadderError::NoLexicon {
                config_path: Self::config_path().unwrap_or_else(|_| PathBuf::from(CONFIG_FILE)),
            }),
        }
    }

    /// Resolve the output format: an explicit flag wins over the config file.
    pub fn resolve_format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.or(self.format).unwrap_or_default()
    }
}
