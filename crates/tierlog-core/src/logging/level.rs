//! Severity levels and sink thresholds
//!
//! `Level` is the closed set of severities a log call can carry. `Threshold` is what a sink is
//! configured with: either a level (inclusive) or `Nothing`, which sits above every level and
//! therefore never admits a call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_GREEN: &str = "\x1b[32m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_WHITE: &str = "\x1b[37m";
pub const COLOR_GRAY: &str = "\x1b[90m";

/// Severity of a log call, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    Debug = 0,
    Info = 1,
    Important = 2,
    Warn = 3,
    Error = 4,
    ShouldntHappen = 5,
}

struct LevelSpec {
    label: &'static str,
    color: &'static str,
}

// Indexed by `Level as usize`.
const LEVEL_TABLE: [LevelSpec; Level::COUNT] = [
    LevelSpec { label: "DEBUG", color: COLOR_GRAY },
    LevelSpec { label: "INFO", color: COLOR_WHITE },
    LevelSpec { label: "IMPORTANT", color: COLOR_GREEN },
    LevelSpec { label: "WARN", color: COLOR_YELLOW },
    LevelSpec { label: "ERROR", color: COLOR_RED },
    LevelSpec { label: "SHOULDNT_HAPPEN", color: COLOR_RED },
];

impl Level {
    pub const COUNT: usize = 6;

    /// Every level, lowest severity first
    pub const ALL: [Level; Level::COUNT] = [
        Level::Debug,
        Level::Info,
        Level::Important,
        Level::Warn,
        Level::Error,
        Level::ShouldntHappen,
    ];

    /// Position of this level in per-level tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tag printed between brackets at the start of a line
    pub fn label(self) -> &'static str {
        LEVEL_TABLE[self.index()].label
    }

    /// ANSI color prefix used for console output
    pub fn color(self) -> &'static str {
        LEVEL_TABLE[self.index()].color
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownLevel(s.to_string()))
    }
}

impl TryFrom<String> for Level {
    type Error = ConfigError;

    // `Self::Error` would also name the `Level::Error` variant.
    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.label().to_lowercase()
    }
}

/// Minimum severity a sink accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Threshold {
    /// Admit calls at this level or above
    Level(Level),
    /// Admit nothing
    Nothing,
}

impl Threshold {
    /// Whether a call at `level` passes this threshold
    pub fn admits(self, level: Level) -> bool {
        Threshold::Level(level) >= self
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Level(Level::Debug)
    }
}

impl From<Level> for Threshold {
    fn from(level: Level) -> Self {
        Threshold::Level(level)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Level(level) => level.fmt(f),
            Threshold::Nothing => f.write_str("NOTHING"),
        }
    }
}

impl FromStr for Threshold {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nothing" | "none" | "off" => Ok(Threshold::Nothing),
            _ => s.parse().map(Threshold::Level),
        }
    }
}

impl TryFrom<String> for Threshold {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        match threshold {
            Threshold::Level(level) => level.into(),
            Threshold::Nothing => "nothing".to_string(),
        }
    }
}
