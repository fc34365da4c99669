//! crates/logging-sink/src/error.rs
//!
//! Error types for sink delivery.

use std::io;

use thiserror::Error;

/// Result type for sink delivery.
pub type SinkResult<T = ()> = Result<T, SinkError>;

/// Errors a sink can report while delivering an event.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the rendered event failed.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    /// A thread panicked while holding the sink's lock.
    #[error("sink lock poisoned by a panicked writer")]
    Poisoned,
    /// Several children of a composite sink failed for the same event.
    #[error("{}", describe_failures(.0))]
    Composite(Vec<SinkError>),
    /// Failure reported by a sink implemented outside this crate.
    #[error("{0}")]
    Other(String),
}

impl SinkError {
    /// Builds an [`Other`](Self::Other) error from any displayable value.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Number of leaf failures this error stands for.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        match self {
            Self::Composite(failures) => failures.iter().map(Self::failure_count).sum(),
            _ => 1,
        }
    }
}

fn describe_failures(failures: &[SinkError]) -> String {
    let mut text = format!("{} sinks failed", failures.len());
    for (index, failure) in failures.iter().enumerate() {
        let separator = if index == 0 { ": " } else { "; " };
        text.push_str(separator);
        text.push_str(&failure.to_string());
    }
    text
}
