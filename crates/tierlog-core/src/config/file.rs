//! File-based logger configuration (YAML)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::logging::Threshold;

/// Logger settings as stored on disk
///
/// ```yaml
/// console_threshold: warn
/// file_threshold: error
/// log_file: /var/log/service.log
/// enabled: true
/// ```
///
/// Every field is optional. An empty `log_file` means `logs.txt` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level printed to the console
    pub console_threshold: Threshold,
    /// Minimum level appended to the log file
    pub file_threshold: Threshold,
    pub log_file: PathBuf,
    pub enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console_threshold: Threshold::default(),
            file_threshold: Threshold::default(),
            log_file: PathBuf::new(),
            enabled: true,
        }
    }
}

/// User-level config file (`~/.config/tierlog/config.yaml` on Linux)
pub fn user_config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("tierlog").join("config.yaml")
}

impl LoggerConfig {
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse YAML: {}", e)))
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse JSON: {}", e)))
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize YAML: {}", e)))
    }

    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Write as YAML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// User-level config file with environment overrides applied.
    ///
    /// Fails only when the file itself cannot be read or parsed. Environment overrides
    /// that could not be applied are returned next to the config.
    pub fn discover() -> ConfigResult<(Self, Vec<ConfigError>)> {
        Self::discover_at(user_config_path(), |key| std::env::var(key).ok())
    }

    /// `discover` with an explicit file and variable lookup
    pub fn discover_at(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<(Self, Vec<ConfigError>)> {
        let mut config = Self::load(path)?;
        let rejected = config.apply_env_from(lookup);
        Ok((config, rejected))
    }
}
