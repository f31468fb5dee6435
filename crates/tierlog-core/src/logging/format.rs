//! Line formatting
//!
//! A formatted line is the header `[LABEL] DD/MM/YYYY HH:MM:SS.mmm: message\n` followed by one
//! indented continuation line per attached error. The same text goes to the console (wrapped
//! in color) and to the log file (plain).

use std::error::Error;
use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::level::{Level, COLOR_RESET};

const ERROR_INDENT: &str = "\t\t\t\t";

/// Render an instant as `DD/MM/YYYY HH:MM:SS.mmm` in UTC
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%d/%m/%Y %H:%M:%S%.3f").to_string()
}

/// Build the full text for one log call
pub fn format_line(
    level: Level,
    message: &str,
    errors: &[&dyn Error],
    now: DateTime<Utc>,
) -> String {
    let mut line = format!("[{}] {}: {}\n", level.label(), format_timestamp(now), message);

    let numbered = errors.len() > 1;
    for (i, err) in errors.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = if numbered {
            writeln!(line, "{}=> err {}: {}", ERROR_INDENT, i + 1, err)
        } else {
            writeln!(line, "{}=> err: {}", ERROR_INDENT, err)
        };
    }

    line
}

/// Wrap a formatted line in the level's color and a reset sequence
pub fn colorize(level: Level, line: &str) -> String {
    format!("{}{}{}", level.color(), line, COLOR_RESET)
}
