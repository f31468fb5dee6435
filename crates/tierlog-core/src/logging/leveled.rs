//! Leveled logger with console, file and callback sinks
//!
//! Each call is formatted once and then offered to three independent sinks:
//! the console (when the console threshold admits the level), the log file (when the file
//! threshold admits it) and the callback registered for that level, if any. A disabled
//! logger returns before doing any of this.

use std::error::Error;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::console::ConsoleSink;
use super::error::DiagnosticSink;
use super::file_sink::FileSink;
use super::format::format_line;
use super::level::{Level, Threshold};
use super::traits::Logger;
use crate::config::LoggerConfig;

/// Hook run for every enabled call at its level.
///
/// Arguments are the formatted line, the original message and the attached errors.
pub type Callback = Arc<dyn Fn(&str, &str, &[&dyn Error]) + Send + Sync>;

/// Source of the current instant
pub type Clock = fn() -> DateTime<Utc>;

/// Logger writing to the console and an append-only file
///
/// # Example
///
/// ```no_run
/// use tierlog_core::{Level, LeveledLogger, Logger, Threshold};
///
/// let mut logger = LeveledLogger::new()
///     .with_console_threshold(Level::Warn)
///     .with_file_threshold(Level::Error)
///     .with_log_file("service.log");
///
/// logger.set_callback(Level::ShouldntHappen, |line, _message, _errors| {
///     eprint!("alert: {}", line);
/// });
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "ENOSPC");
/// logger.error("disk nearly full", &[&err]);
///
/// logger.set_file_threshold(Threshold::Nothing);
/// logger.disable();
/// ```
pub struct LeveledLogger {
    console_threshold: Threshold,
    file_threshold: Threshold,
    enabled: bool,
    callbacks: [Option<Callback>; Level::COUNT],
    console: ConsoleSink,
    file: FileSink,
    diagnostics: DiagnosticSink,
    clock: Clock,
}

impl Default for LeveledLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LeveledLogger {
    /// Enabled logger that sends every level to stdout and `logs.txt`
    pub fn new() -> Self {
        Self {
            console_threshold: Threshold::default(),
            file_threshold: Threshold::default(),
            enabled: true,
            callbacks: Default::default(),
            console: ConsoleSink::stdout(),
            file: FileSink::default(),
            diagnostics: DiagnosticSink::stderr(),
            clock: Utc::now,
        }
    }

    /// Logger configured from a loaded config
    pub fn from_config(config: &LoggerConfig) -> Self {
        let mut logger = Self::new();
        logger.apply_config(config);
        logger
    }

    /// Overwrite thresholds, file path and enabled flag. Callbacks and sinks are kept.
    pub fn apply_config(&mut self, config: &LoggerConfig) {
        self.console_threshold = config.console_threshold;
        self.file_threshold = config.file_threshold;
        self.file.set_path(config.log_file.clone());
        self.enabled = config.enabled;
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            console_threshold: self.console_threshold,
            file_threshold: self.file_threshold,
            log_file: self.file.configured_path().to_path_buf(),
            enabled: self.enabled,
        }
    }

    pub fn with_console_threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.set_console_threshold(threshold);
        self
    }

    pub fn with_file_threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.set_file_threshold(threshold);
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.set_log_file(path);
        self
    }

    /// Send console output to `writer` instead of stdout
    pub fn with_console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = ConsoleSink::with_writer(writer);
        self
    }

    /// Send the logger's own failure reports to `writer` instead of stderr
    pub fn with_diagnostic_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.diagnostics = DiagnosticSink::with_writer(writer);
        self
    }

    /// Replace the time source used for timestamps
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_callback<F>(mut self, level: Level, callback: F) -> Self
    where
        F: Fn(&str, &str, &[&dyn Error]) + Send + Sync + 'static,
    {
        self.set_callback(level, callback);
        self
    }

    pub fn console_threshold(&self) -> Threshold {
        self.console_threshold
    }

    pub fn set_console_threshold(&mut self, threshold: impl Into<Threshold>) {
        self.console_threshold = threshold.into();
    }

    pub fn file_threshold(&self) -> Threshold {
        self.file_threshold
    }

    pub fn set_file_threshold(&mut self, threshold: impl Into<Threshold>) {
        self.file_threshold = threshold.into();
    }

    /// Path file appends go to; `logs.txt` when no path is set
    pub fn log_file(&self) -> &Path {
        self.file.path()
    }

    /// Set the log file path. An empty path selects `logs.txt`.
    pub fn set_log_file(&mut self, path: impl Into<PathBuf>) {
        self.file.set_path(path);
    }

    /// Register the callback for `level`, replacing any previous one
    pub fn set_callback<F>(&mut self, level: Level, callback: F)
    where
        F: Fn(&str, &str, &[&dyn Error]) + Send + Sync + 'static,
    {
        self.callbacks[level.index()] = Some(Arc::new(callback));
    }

    /// Register an already shared callback for `level`
    pub fn set_shared_callback(&mut self, level: Level, callback: Callback) {
        self.callbacks[level.index()] = Some(callback);
    }

    /// Remove the callback for `level`, returning it if one was set
    pub fn clear_callback(&mut self, level: Level) -> Option<Callback> {
        self.callbacks[level.index()].take()
    }

    pub fn has_callback(&self, level: Level) -> bool {
        self.callbacks[level.index()].is_some()
    }

    /// Resume output
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Suppress all output, including callbacks
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Format the call and write it to the console and file sinks.
    ///
    /// Returns the formatted line together with the level's callback, which the caller
    /// invokes. This lets the global logger release its lock before user code runs.
    pub(crate) fn dispatch(
        &self,
        level: Level,
        message: &str,
        errors: &[&dyn Error],
    ) -> Option<(String, Callback)> {
        if !self.enabled {
            return None;
        }

        let line = format_line(level, message, errors, (self.clock)());

        if self.console_threshold.admits(level) {
            if let Err(e) = self.console.write_line(level, &line) {
                self.diagnostics.report(&e);
            }
        }

        if self.file_threshold.admits(level) {
            if let Err(e) = self.file.append(&line) {
                self.diagnostics.report(&e);
            }
        }

        self.callbacks[level.index()]
            .clone()
            .map(|callback| (line, callback))
    }
}

impl Logger for LeveledLogger {
    fn log(&self, level: Level, message: &str, errors: &[&dyn Error]) {
        if let Some((line, callback)) = self.dispatch(level, message, errors) {
            callback(&line, message, errors);
        }
    }
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let callbacks: Vec<Level> = Level::ALL
            .into_iter()
            .filter(|level| self.has_callback(*level))
            .collect();

        f.debug_struct("LeveledLogger")
            .field("console_threshold", &self.console_threshold)
            .field("file_threshold", &self.file_threshold)
            .field("log_file", &self.file.path())
            .field("enabled", &self.enabled)
            .field("callbacks", &callbacks)
            .finish()
    }
}
