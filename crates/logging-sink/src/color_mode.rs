use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Controls whether a [`ConsoleSink`](crate::ConsoleSink) styles the line prefix with ANSI colors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Color only when the target is a terminal.
    #[default]
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

impl ColorMode {
    /// Resolves the mode against whether the target is a terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::ColorMode;
    ///
    /// assert!(ColorMode::Auto.should_colorize(true));
    /// assert!(!ColorMode::Auto.should_colorize(false));
    /// assert!(ColorMode::Always.should_colorize(false));
    /// assert!(!ColorMode::Never.should_colorize(true));
    /// ```
    #[must_use]
    pub const fn should_colorize(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Lower-case name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl From<bool> for ColorMode {
    /// `true` forces color on, `false` forces it off.
    fn from(colorize: bool) -> Self {
        if colorize { Self::Always } else { Self::Never }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`ColorMode`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown color mode '{0}' (expected auto, always or never)")]
pub struct ParseColorModeError(String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "on" | "true" => Ok(Self::Always),
            "never" | "off" | "false" => Ok(Self::Never),
            _ => Err(ParseColorModeError(s.to_owned())),
        }
    }
}
