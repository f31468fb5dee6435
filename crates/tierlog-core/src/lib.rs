//! Tierlog Core
//!
//! A small leveled logger. Each call carries a severity, a message and any number of
//! attached errors, and is routed independently to:
//! - the console, color coded per level, when the console threshold admits it
//! - an append-only log file (`logs.txt` by default), uncolored, when the file threshold
//!   admits it
//! - the callback registered for that level, if any
//!
//! ```rust,no_run
//! use tierlog_core::{Level, LeveledLogger, Logger};
//!
//! let logger = LeveledLogger::new()
//!     .with_console_threshold(Level::Warn)
//!     .with_file_threshold(Level::Error);
//!
//! let enospc = std::io::Error::new(std::io::ErrorKind::Other, "ENOSPC");
//! let timeout = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
//! logger.error("disk nearly full", &[&enospc, &timeout]);
//! ```
//!
//! Enabling ANSI escape processing on consoles that need it (older Windows terminals) is up
//! to the host application and should happen before the first log call.

pub mod config;
pub mod logging;

pub use config::{ConfigError, ConfigResult, LoggerConfig};
pub use logging::{
    global, BoxedLogger, Callback, GlobalLogger, Level, LeveledLogger, Logger, LoggerError,
    NoOpLogger, SharedLogger, Threshold,
};
