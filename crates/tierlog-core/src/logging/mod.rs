//! Leveled logging: levels, formatting, sinks and loggers

mod console;
mod error;
mod file_sink;
mod format;
pub mod global;
mod leveled;
mod level;
mod noop;
mod traits;

pub use console::{ConsoleSink, MemoryWriter};
pub use error::{DiagnosticSink, LoggerError, LoggerResult, DIAGNOSTIC_PREFIX};
pub use file_sink::{FileSink, DEFAULT_LOG_FILE};
pub use format::{colorize, format_line, format_timestamp};
pub use global::GlobalLogger;
pub use leveled::{Callback, Clock, LeveledLogger};
pub use level::{
    Level, Threshold, COLOR_GRAY, COLOR_GREEN, COLOR_RED, COLOR_RESET, COLOR_WHITE, COLOR_YELLOW,
};
pub use noop::NoOpLogger;
pub use traits::{BoxedLogger, Logger, SharedLogger};
