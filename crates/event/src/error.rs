//! crates/event/src/error.rs
//!
//! Error types for level parsing.

use thiserror::Error;

const LEVEL_NAMES: &str = "verbose, debug, info, warn or error";
const FILTER_NAMES: &str = "verbose, debug, info, warn, error or none";

/// Returned when a string does not name a known level.
///
/// The message lists the names the target type accepts: `none` only
/// appears when a threshold was being parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown log level '{input}' (expected {expected})")]
pub struct ParseLevelError {
    input: String,
    expected: &'static str,
}

impl ParseLevelError {
    pub(crate) fn level(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            expected: LEVEL_NAMES,
        }
    }

    pub(crate) fn filter(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            expected: FILTER_NAMES,
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
