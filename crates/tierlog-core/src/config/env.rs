//! Environment variable overrides

use super::error::{ConfigError, ConfigResult};
use super::file::LoggerConfig;

pub const ENV_CONSOLE_LEVEL: &str = "TIERLOG_CONSOLE_LEVEL";
pub const ENV_FILE_LEVEL: &str = "TIERLOG_FILE_LEVEL";
pub const ENV_LOG_FILE: &str = "TIERLOG_LOG_FILE";
pub const ENV_ENABLED: &str = "TIERLOG_ENABLED";

impl LoggerConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Vec<ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Unset variables leave fields alone. Each variable is applied on its own: a malformed
    /// one is skipped, keeping the current value, and returned in the error list.
    pub fn apply_env_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        if let Some(value) = lookup(ENV_CONSOLE_LEVEL) {
            override_with(&mut self.console_threshold, value.parse(), &mut rejected);
        }
        if let Some(value) = lookup(ENV_FILE_LEVEL) {
            override_with(&mut self.file_threshold, value.parse(), &mut rejected);
        }
        if let Some(value) = lookup(ENV_LOG_FILE) {
            self.log_file = value.into();
        }
        if let Some(value) = lookup(ENV_ENABLED) {
            override_with(&mut self.enabled, parse_bool(ENV_ENABLED, &value), &mut rejected);
        }

        rejected
    }
}

fn override_with<T>(field: &mut T, parsed: ConfigResult<T>, rejected: &mut Vec<ConfigError>) {
    match parsed {
        Ok(value) => *field = value,
        Err(e) => rejected.push(e),
    }
}

fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
