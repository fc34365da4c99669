use super::ConsoleSink;
use crate::color_mode::ColorMode;
use is_terminal::IsTerminal;
use std::io::{self, Stderr, Stdout};
use std::sync::{Mutex, PoisonError};
use time::UtcOffset;

impl ConsoleSink<Stdout> {
    /// Creates a sink on standard output, coloring when stdout is a terminal.
    #[must_use]
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::with_parts(stdout, ColorMode::Auto, is_terminal)
    }
}

impl ConsoleSink<Stderr> {
    /// Creates a sink on standard error, coloring when stderr is a terminal.
    #[must_use]
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        let is_terminal = stderr.is_terminal();
        Self::with_parts(stderr, ColorMode::Auto, is_terminal)
    }
}

impl Default for ConsoleSink<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W> ConsoleSink<W> {
    /// Creates a sink on an arbitrary writer.
    ///
    /// Arbitrary writers are never treated as terminals, so the default
    /// [`ColorMode::Auto`] renders plain text. Use
    /// [`with_color_mode`](Self::with_color_mode) to force escapes on.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_parts(writer, ColorMode::Auto, false)
    }

    /// Creates a sink from explicit parts.
    ///
    /// `is_terminal` tells [`ColorMode::Auto`] whether the writer is attached
    /// to a terminal. Timestamps render in the local offset when the platform
    /// can determine it and in UTC otherwise.
    #[must_use]
    pub fn with_parts(writer: W, color_mode: ColorMode, is_terminal: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            color_mode,
            is_terminal,
            offset: local_offset(),
        }
    }

    /// Replaces the [`ColorMode`].
    #[must_use]
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Replaces the offset used when rendering timestamps.
    #[must_use]
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Consumes the sink and returns the wrapped writer.
    ///
    /// A writer left behind by a panicking thread is still returned; whatever
    /// it buffered up to the panic is kept.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}
