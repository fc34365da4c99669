//! crates/event/src/level.rs
//! Call-site severities and the threshold filter that gates them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ParseLevelError;

/// Severity attached to a single log call.
///
/// Levels are totally ordered from [`Level::Verbose`] (least severe) to
/// [`Level::Error`] (most severe). The threshold-only "suppress everything"
/// value lives on [`LevelFilter::Off`] so it can never be used at a call site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Fine-grained tracing output.
    Verbose = 0,
    /// Diagnostics useful while developing.
    Debug = 1,
    /// Normal operational messages.
    Info = 2,
    /// Something unexpected that the application recovered from.
    Warn = 3,
    /// A failure the application could not recover from.
    Error = 4,
}

impl Level {
    /// Every call-site level, least severe first.
    pub const ALL: [Self; 5] = [
        Self::Verbose,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Lower-case name used when rendering and parsing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Display color hint for events emitted at this level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Verbose | Self::Debug => Color::Default,
            Self::Info => Color::Blue,
            Self::Warn => Color::Orange,
            Self::Error => Color::Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" | "trace" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError::level(s)),
        }
    }
}

/// Minimum severity a configuration lets through.
///
/// The discriminants line up with [`Level`] so a filter can be stored in an
/// atomic byte and compared against a call-site level without branching.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LevelFilter {
    /// Let everything through.
    Verbose = 0,
    /// Let debug and above through.
    #[default]
    Debug = 1,
    /// Let info and above through.
    Info = 2,
    /// Let warnings and errors through.
    Warn = 3,
    /// Let errors through.
    Error = 4,
    /// Suppress every call.
    #[serde(rename = "none", alias = "off")]
    Off = 5,
}

impl LevelFilter {
    /// Every threshold value, most permissive first.
    pub const ALL: [Self; 6] = [
        Self::Verbose,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Off,
    ];

    /// Reports whether a call at `level` passes this threshold.
    #[inline]
    #[must_use]
    pub const fn permits(self, level: Level) -> bool {
        level as u8 >= self as u8
    }

    /// Raw discriminant, suitable for atomic storage.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8).
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Verbose),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Off),
            _ => None,
        }
    }

    /// Lower-case name used when rendering and parsing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Off => "none",
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Verbose => Self::Verbose,
            Level::Debug => Self::Debug,
            Level::Info => Self::Info,
            Level::Warn => Self::Warn,
            Level::Error => Self::Error,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::Off),
            _ => s
                .parse::<Level>()
                .map(Self::from)
                .map_err(|_| ParseLevelError::filter(s)),
        }
    }
}
