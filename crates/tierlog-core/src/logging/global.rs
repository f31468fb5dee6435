//! Process-wide logger
//!
//! If nothing was installed, the first use builds it from the user config file and the
//! `TIERLOG_*` environment variables. It then lives for the rest of the process. Use
//! `configure` to change it in place and `install` to swap in a fully built logger.
//!
//! Console and file output happen under a read lock. Callbacks run after that lock is
//! released, so they may log through the global logger or reconfigure it.

use std::error::Error;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use super::error::DiagnosticSink;
use super::leveled::LeveledLogger;
use super::level::Level;
use super::traits::Logger;
use crate::config::LoggerConfig;

static GLOBAL: OnceCell<RwLock<LeveledLogger>> = OnceCell::new();

fn global() -> &'static RwLock<LeveledLogger> {
    GLOBAL.get_or_init(|| RwLock::new(discovered()))
}

fn discovered() -> LeveledLogger {
    let diagnostics = DiagnosticSink::stderr();
    let config = match LoggerConfig::discover() {
        Ok((config, rejected)) => {
            for e in &rejected {
                diagnostics.report(&format_args!("Ignoring environment override: {}", e));
            }
            config
        }
        Err(e) => {
            diagnostics.report(&format_args!("Error loading config: {}", e));
            LoggerConfig::default()
        }
    };
    LeveledLogger::from_config(&config)
}

/// Replace the global logger, returning the previous one.
///
/// Installing before any other use skips config discovery entirely.
pub fn install(logger: LeveledLogger) -> Option<LeveledLogger> {
    match GLOBAL.set(RwLock::new(logger)) {
        Ok(()) => None,
        Err(lock) => Some(std::mem::replace(&mut *global().write(), lock.into_inner())),
    }
}

/// Mutate the global logger in place
pub fn configure<R>(f: impl FnOnce(&mut LeveledLogger) -> R) -> R {
    f(&mut global().write())
}

pub fn enable() {
    global().write().enable();
}

pub fn disable() {
    global().write().disable();
}

pub fn is_enabled() -> bool {
    global().read().is_enabled()
}

/// Log through the global logger
pub fn log(level: Level, message: &str, errors: &[&dyn Error]) {
    let pending = global().read().dispatch(level, message, errors);
    if let Some((line, callback)) = pending {
        callback(&line, message, errors);
    }
}

pub fn debug(message: &str, errors: &[&dyn Error]) {
    log(Level::Debug, message, errors);
}

pub fn info(message: &str, errors: &[&dyn Error]) {
    log(Level::Info, message, errors);
}

pub fn important(message: &str, errors: &[&dyn Error]) {
    log(Level::Important, message, errors);
}

pub fn warn(message: &str, errors: &[&dyn Error]) {
    log(Level::Warn, message, errors);
}

pub fn error(message: &str, errors: &[&dyn Error]) {
    log(Level::Error, message, errors);
}

pub fn shouldnt_happen(message: &str, errors: &[&dyn Error]) {
    log(Level::ShouldntHappen, message, errors);
}

/// Handle that forwards to the global logger, for code that takes a `SharedLogger`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLogger;

impl Logger for GlobalLogger {
    fn log(&self, level: Level, message: &str, errors: &[&dyn Error]) {
        log(level, message, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::console::MemoryWriter;
    use crate::logging::{SharedLogger, Threshold};
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    // Single test: the global logger is shared by every test in this binary. Installing
    // first means the user config file and TIERLOG_* variables are never read here.
    #[test]
    fn test_global_logger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("global.log");
        let console = MemoryWriter::new();

        let previous = install(
            LeveledLogger::new()
                .with_console_writer(console.clone())
                .with_log_file(&path)
                .with_console_threshold(Level::Info)
                .with_file_threshold(Level::Error),
        );
        assert!(previous.is_none());

        debug("hidden", &[]);
        info("shown", &[]);
        error("stored", &[]);
        assert!(!console.contents().contains("hidden"));
        assert!(console.contents().contains("shown"));
        let file = fs::read_to_string(&path).unwrap();
        assert!(file.contains("[ERROR]"));
        assert!(!file.contains("shown"));

        disable();
        assert!(!is_enabled());
        shouldnt_happen("muted", &[]);
        assert!(!console.contents().contains("muted"));
        enable();

        configure(|logger| logger.set_console_threshold(Threshold::Nothing));
        let shared: SharedLogger = Arc::new(GlobalLogger);
        shared.warn("silent console", &[]);
        assert!(!console.contents().contains("silent console"));

        important("back", &[]);
        warn("back", &[]);
        assert_eq!(fs::read_to_string(&path).unwrap(), file);

        // Callbacks run without the lock held, so they can log and reconfigure.
        configure(|logger| {
            logger.set_console_threshold(Level::Debug);
            logger.set_callback(Level::ShouldntHappen, |_, message, _| {
                info(&format!("escalated: {}", message), &[]);
                configure(|logger| logger.set_console_threshold(Level::Warn));
            });
        });
        shouldnt_happen("reentrant", &[]);
        assert!(console.contents().contains("escalated: reentrant"));
        assert_eq!(
            configure(|logger| logger.console_threshold()),
            Threshold::Level(Level::Warn)
        );

        let replaced = install(
            LeveledLogger::new()
                .with_console_writer(MemoryWriter::new())
                .with_file_threshold(Threshold::Nothing),
        );
        assert!(replaced.is_some_and(|old| old.has_callback(Level::ShouldntHappen)));
    }
}
