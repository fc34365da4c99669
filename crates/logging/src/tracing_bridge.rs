//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` crate into the marklog sink graph.
//!
//! [`MarklogLayer`] is a `tracing-subscriber` layer that turns every
//! `tracing` event into a [`LogEvent`] and hands it to a [`LoggingConfig`]:
//!
//! - the event target becomes the logger name,
//! - the `message` field becomes the message,
//! - every other field becomes a marker,
//! - `TRACE` maps to [`Level::Verbose`].
//!
//! Events are gated by the configuration's threshold, so `set_level` applies
//! to `tracing` call sites exactly as it does to [`Logger`](crate::Logger)s.
//!
//! ```
//! use std::sync::Arc;
//! use logging::{LevelFilter, LoggingConfig, MarklogLayer, MemorySink};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let config = Arc::new(LoggingConfig::silent(LevelFilter::Info));
//! let captured = MemorySink::new();
//! config.add_sink(captured.clone());
//!
//! let subscriber = tracing_subscriber::registry().with(MarklogLayer::new(config));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(target: "Storage", pct = 95, "disk low");
//!     tracing::debug!(target: "Storage", "hidden");
//! });
//!
//! let events = captured.events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].logger(), "Storage");
//! assert_eq!(events[0].markers().get("pct"), Some("95"));
//! ```

use std::fmt;
use std::sync::Arc;

use event::{Level, LogEvent, Markers};
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::config::LoggingConfig;

const FALLBACK_TARGET: &str = "tracing";

/// A tracing layer that forwards events to a [`LoggingConfig`].
#[derive(Clone, Debug)]
pub struct MarklogLayer {
    config: Arc<LoggingConfig>,
}

impl MarklogLayer {
    /// Creates a layer delivering to `config`.
    #[must_use]
    pub const fn new(config: Arc<LoggingConfig>) -> Self {
        Self { config }
    }

    /// The configuration events are delivered to.
    #[must_use]
    pub const fn config(&self) -> &Arc<LoggingConfig> {
        &self.config
    }

    /// Maps a tracing level to a marklog level.
    #[must_use]
    pub const fn map_level(level: tracing::Level) -> Level {
        match level {
            tracing::Level::TRACE => Level::Verbose,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

impl<S> Layer<S> for MarklogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(*metadata.level());
        if !self.config.enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let target = match metadata.target() {
            "" => FALLBACK_TARGET,
            target => target,
        };
        let record = LogEvent::new(target, level, visitor.message.unwrap_or_default())
            .with_markers(visitor.markers);
        self.config.deliver(&record);
    }
}

/// Splits event fields into the message and markers.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    markers: Markers,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.markers.insert(field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.markers.insert(field.name(), rendered);
        }
    }
}

/// Installs a registry with a [`MarklogLayer`] as the global default
/// subscriber.
///
/// # Errors
///
/// Fails when a global subscriber was already installed.
pub fn init_tracing(config: Arc<LoggingConfig>) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(MarklogLayer::new(config))
        .try_init()
}
