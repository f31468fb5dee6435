//! Append-only log file sink
//!
//! Every append opens the file (creating it if needed), writes the line and closes it again.
//! No handle is kept between calls. Appends through the same sink are serialized by a mutex;
//! other processes writing the same file are not coordinated with.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::error::{LoggerError, LoggerResult};

/// File used when no path is configured
pub const DEFAULT_LOG_FILE: &str = "logs.txt";

#[derive(Debug, Default)]
pub struct FileSink {
    /// Configured path, possibly empty
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path as configured; empty means the default file
    pub fn configured_path(&self) -> &Path {
        &self.path
    }

    /// Path appends actually go to
    pub fn path(&self) -> &Path {
        if self.path.as_os_str().is_empty() {
            Path::new(DEFAULT_LOG_FILE)
        } else {
            &self.path
        }
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Append a plain formatted line
    pub fn append(&self, line: &str) -> LoggerResult<()> {
        let path = self.path();
        let _guard = self.lock.lock();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::file_open(path, e))?;

        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::file_write(path, e))
    }
}
