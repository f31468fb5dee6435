//! Logger trait definition

use std::error::Error;
use std::sync::Arc;

use super::level::Level;

/// Leveled logging abstraction
///
/// Implementations:
/// - `LeveledLogger`: console, log file and per-level callbacks
/// - `NoOpLogger`: silent logger for testing
///
/// Logging never fails outward. Whatever goes wrong inside an implementation stays there.
pub trait Logger: Send + Sync {
    /// Log `message` at `level` with any number of attached errors
    fn log(&self, level: Level, message: &str, errors: &[&dyn Error]);

    fn debug(&self, message: &str, errors: &[&dyn Error]) {
        self.log(Level::Debug, message, errors);
    }

    fn info(&self, message: &str, errors: &[&dyn Error]) {
        self.log(Level::Info, message, errors);
    }

    fn important(&self, message: &str, errors: &[&dyn Error]) {
        self.log(Level::Important, message, errors);
    }

    fn warn(&self, message: &str, errors: &[&dyn Error]) {
        self.log(Level::Warn, message, errors);
    }

    fn error(&self, message: &str, errors: &[&dyn Error]) {
        self.log(Level::Error, message, errors);
    }

    fn shouldnt_happen(&self, message: &str, errors: &[&dyn Error]) {
        self.log(Level::ShouldntHappen, message, errors);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

impl<T: Logger + ?Sized> Logger for &T {
    fn log(&self, level: Level, message: &str, errors: &[&dyn Error]) {
        (**self).log(level, message, errors);
    }
}

impl<T: Logger + ?Sized> Logger for Arc<T> {
    fn log(&self, level: Level, message: &str, errors: &[&dyn Error]) {
        (**self).log(level, message, errors);
    }
}

impl<T: Logger + ?Sized> Logger for Box<T> {
    fn log(&self, level: Level, message: &str, errors: &[&dyn Error]) {
        (**self).log(level, message, errors);
    }
}

/// Convenience macros for logging formatted messages without attached errors
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::debug(&$logger, &format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::info(&$logger, &format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! log_important {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::important(&$logger, &format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::warn(&$logger, &format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::error(&$logger, &format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! log_shouldnt_happen {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::shouldnt_happen(&$logger, &format!($($arg)*), &[])
    };
}
