//! crates/logging/src/error.rs
//!
//! Error types for logger construction and settings.

use event::ParseLevelError;
use logging_sink::ParseColorModeError;
use thiserror::Error;

/// Errors raised while creating a [`Logger`](crate::Logger).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    /// The logger name was empty or only whitespace.
    #[error("logger name must not be empty")]
    EmptyName,
}

/// Errors raised while reading [`LoggingSettings`](crate::LoggingSettings).
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A level variable held an unknown level name.
    #[error("invalid {var}: {source}")]
    Level {
        /// Variable that held the value.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseLevelError,
    },
    /// A color variable held an unknown color mode.
    #[error("invalid {var}: {source}")]
    Color {
        /// Variable that held the value.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseColorModeError,
    },
}
