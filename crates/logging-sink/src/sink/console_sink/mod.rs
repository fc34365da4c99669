use std::fmt;
use std::sync::Mutex;

use time::UtcOffset;

use crate::color_mode::ColorMode;

/// Sink that renders each [`LogEvent`](event::LogEvent) as one line of text.
///
/// Lines have the shape
/// `[HH:MM:SS.mmm][level][logger] message  {markers}  detail detail`. The
/// markers segment only appears when the event carries markers and the
/// details segment only when it carries detail values. When coloring is
/// enabled the bracketed prefix is styled after the event's
/// [`Color`](event::Color).
///
/// The writer sits behind a mutex so a single sink can be shared by every
/// logger in the process; each line is written with one `write_all` call.
///
/// # Examples
///
/// Render into an in-memory buffer with a fixed UTC offset:
///
/// ```
/// use event::{Level, LogEvent, Markers};
/// use logging_sink::{ConsoleSink, Sink};
/// use time::macros::datetime;
/// use time::UtcOffset;
///
/// let sink = ConsoleSink::new(Vec::<u8>::new()).with_offset(UtcOffset::UTC);
/// let event = LogEvent::new("Disk", Level::Warn, "disk low")
///     .with_markers(Markers::from([("pct", "95")]))
///     .with_timestamp(datetime!(2024-03-01 09:15:02.042 UTC));
///
/// sink.log(&event)?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[09:15:02.042][warn][Disk] disk low  {pct=95}\n");
/// # Ok::<(), logging_sink::SinkError>(())
/// ```
pub struct ConsoleSink<W> {
    writer: Mutex<W>,
    color_mode: ColorMode,
    is_terminal: bool,
    offset: UtcOffset,
}

mod constructors;
mod writing;

impl<W> ConsoleSink<W> {
    /// The configured [`ColorMode`].
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Whether rendered lines include color escapes.
    #[must_use]
    pub const fn colorizes(&self) -> bool {
        self.color_mode.should_colorize(self.is_terminal)
    }

    /// Offset used when rendering timestamps.
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl<W> fmt::Debug for ConsoleSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("color_mode", &self.color_mode)
            .field("is_terminal", &self.is_terminal)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
