//! Console sink

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::LoggerResult;
use super::format::colorize;
use super::level::Level;

/// Writes color-wrapped lines to stdout, or to any injected writer
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSink {
    /// Console sink backed by the process stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console sink backed by a custom writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Print one formatted line in its level color.
    ///
    /// The line already ends with a newline; the print adds another after the reset
    /// sequence, leaving a blank line between entries.
    pub fn write_line(&self, level: Level, line: &str) -> LoggerResult<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", colorize(level, line))?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

/// In-memory writer for capturing console output
///
/// Clones share the same buffer, so one clone can be handed to a `ConsoleSink` while
/// another reads back what was printed.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_wraps_in_color() {
        let out = MemoryWriter::new();
        let sink = ConsoleSink::with_writer(out.clone());

        sink.write_line(Level::Warn, "[WARN] t: careful\n").unwrap();

        assert_eq!(out.contents(), "\x1b[33m[WARN] t: careful\n\x1b[0m\n");
    }

    #[test]
    fn test_memory_writer_clear() {
        let out = MemoryWriter::new();
        let sink = ConsoleSink::with_writer(out.clone());
        sink.write_line(Level::Info, "a\n").unwrap();
        out.clear();
        assert!(out.contents().is_empty());
    }

    #[test]
    fn test_write_failure_is_returned() {
        let sink = ConsoleSink::with_writer(BrokenPipe);
        let err = sink.write_line(Level::Error, "x\n").unwrap_err();
        assert!(err.to_string().starts_with("Error writing to console"));
    }
}
