//! Logger error types
//!
//! These never reach callers of the logging methods. Sinks return them and the logger
//! reports them through its `DiagnosticSink` (stderr unless replaced).

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

/// Failures inside a sink
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The log file could not be opened or created
    #[error("Error opening file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file was opened but the line could not be written
    #[error("Error writing to file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The console writer rejected the line
    #[error("Error writing to console: {0}")]
    Console(#[from] io::Error),
}

impl LoggerError {
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;

/// Prefix of every diagnostic the logger prints about itself
pub const DIAGNOSTIC_PREFIX: &str = "[Logger]";

/// Fallback channel for the logger's own failures, stderr by default
pub struct DiagnosticSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl DiagnosticSink {
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Print `[Logger] <problem>`. A failing diagnostic writer is ignored.
    pub fn report(&self, problem: &dyn fmt::Display) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{} {}", DIAGNOSTIC_PREFIX, problem);
        let _ = writer.flush();
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::console::MemoryWriter;

    #[test]
    fn test_messages() {
        let open = LoggerError::file_open(
            "/nope/logs.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(open.to_string(), "Error opening file /nope/logs.txt: missing");

        let write =
            LoggerError::file_write("logs.txt", io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(write.to_string(), "Error writing to file logs.txt: disk full");

        let console: LoggerError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(console.to_string(), "Error writing to console: closed");
    }

    #[test]
    fn test_report_prefixes_line() {
        let out = MemoryWriter::new();
        let sink = DiagnosticSink::with_writer(out.clone());
        let err =
            LoggerError::file_write("logs.txt", io::Error::new(io::ErrorKind::Other, "disk full"));

        sink.report(&err);

        assert_eq!(out.contents(), "[Logger] Error writing to file logs.txt: disk full\n");
    }
}
