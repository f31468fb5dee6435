//! Configuration error types

use thiserror::Error;

/// Errors that can occur while loading logger configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
