//! crates/event/src/log_event.rs
//! The immutable record handed to sinks.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::color::Color;
use crate::detail::Detail;
use crate::level::Level;
use crate::markers::Markers;

/// A single emitted log call.
///
/// Events are built once, after the level gate has passed, and then only
/// read. The timestamp is captured when the event is built, not when the
/// emitting logger was created. The color is always derived from the level.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEvent {
    timestamp: OffsetDateTime,
    logger: Arc<str>,
    level: Level,
    message: String,
    details: Vec<Detail>,
    markers: Markers,
}

impl LogEvent {
    /// Creates an event stamped with the current UTC time.
    pub fn new(logger: impl Into<Arc<str>>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            logger: logger.into(),
            level,
            message: message.into(),
            details: Vec::new(),
            markers: Markers::new(),
        }
    }

    /// Replaces the markers.
    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Replaces the detail values.
    #[must_use]
    pub fn with_details(mut self, details: Vec<Detail>) -> Self {
        self.details = details;
        self
    }

    /// Overrides the capture time. Mostly useful for deterministic rendering.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// When the event was emitted.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Name of the emitting logger.
    #[must_use]
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// Severity of the call.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Display color hint derived from [`level`](Self::level).
    #[must_use]
    pub const fn color(&self) -> Color {
        self.level.color()
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Additional values in call order.
    #[must_use]
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Structured markers; empty when the call supplied none.
    #[must_use]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }
}
