//! Logger configuration
//!
//! A `LoggerConfig` can come from a YAML file (user-level `~/.config/tierlog/config.yaml` or
//! any explicit path), from JSON, or be built in code. Environment variables override
//! whatever was loaded.

mod env;
mod error;
mod file;

pub use env::{ENV_CONSOLE_LEVEL, ENV_ENABLED, ENV_FILE_LEVEL, ENV_LOG_FILE};
pub use error::{ConfigError, ConfigResult};
pub use file::{user_config_path, LoggerConfig};
