//! crates/logging/src/logger.rs
//! Named emitters bound to a [`LoggingConfig`].

use std::fmt;
use std::sync::Arc;

use event::{Level, LogEvent};
use logging_sink::SinkError;

use crate::call::LogCall;
use crate::config::LoggingConfig;
use crate::error::LoggerError;

/// A named emitter for one subsystem.
///
/// A logger holds its name and a handle to the configuration it reports to.
/// It buffers nothing and performs no I/O itself. Every severity method
/// checks the configuration's threshold first and only then builds a
/// [`LogEvent`], so suppressed calls cost one atomic load. Cloning is cheap
/// and clones share the name allocation.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{LevelFilter, LogCall, Logger, LoggingConfig, MemorySink, markers};
///
/// let config = Arc::new(LoggingConfig::silent(LevelFilter::Info));
/// let captured = MemorySink::new();
/// config.add_sink(captured.clone());
///
/// let log = Logger::with_config("Storage", Arc::clone(&config))?;
/// log.debug("not shown");
/// log.warn((markers! { "pct" => 95 }, "disk low"));
/// log.info(LogCall::message("mounted").detail("/data"));
///
/// let events = captured.events();
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[0].markers().get("pct"), Some("95"));
/// assert_eq!(events[1].details()[0].to_string(), "/data");
/// # Ok::<(), logging::LoggerError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    config: Arc<LoggingConfig>,
}

impl Logger {
    /// Creates a logger bound to the process-wide configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::EmptyName`] when `name` is empty or whitespace.
    pub fn create(name: &str) -> Result<Self, LoggerError> {
        Self::with_config(name, Arc::clone(LoggingConfig::global()))
    }

    /// Creates a logger bound to an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::EmptyName`] when `name` is empty or whitespace.
    pub fn with_config(name: &str, config: Arc<LoggingConfig>) -> Result<Self, LoggerError> {
        if name.trim().is_empty() {
            return Err(LoggerError::EmptyName);
        }
        Ok(Self {
            name: Arc::from(name),
            config,
        })
    }

    /// The subsystem name this logger was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration this logger reports to.
    #[must_use]
    pub const fn config(&self) -> &Arc<LoggingConfig> {
        &self.config
    }

    /// Reports whether a call at `level` would currently be emitted.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.config.enabled(level)
    }

    /// Emits `call` at `level` when the threshold permits it.
    ///
    /// Delivery failures never reach the caller; they are counted and passed
    /// to the configuration's failure handler.
    pub fn log(&self, level: Level, call: impl Into<LogCall>) {
        if !self.enabled(level) {
            return;
        }
        let event = self.event(level, call.into());
        self.config.deliver(&event);
    }

    /// Like [`log`](Self::log) but hands delivery failures back.
    ///
    /// Returns `Ok(false)` when the call was gated out and `Ok(true)` when
    /// every sink accepted the event.
    ///
    /// # Errors
    ///
    /// Returns the [`SinkError`] reported by the root sink.
    pub fn try_log(&self, level: Level, call: impl Into<LogCall>) -> Result<bool, SinkError> {
        if !self.enabled(level) {
            return Ok(false);
        }
        let event = self.event(level, call.into());
        self.config.dispatch(&event)?;
        Ok(true)
    }

    /// Emits at [`Level::Verbose`].
    pub fn verbose(&self, call: impl Into<LogCall>) {
        self.log(Level::Verbose, call);
    }

    /// Emits at [`Level::Debug`].
    pub fn debug(&self, call: impl Into<LogCall>) {
        self.log(Level::Debug, call);
    }

    /// Emits at [`Level::Info`].
    pub fn info(&self, call: impl Into<LogCall>) {
        self.log(Level::Info, call);
    }

    /// Emits at [`Level::Warn`].
    pub fn warn(&self, call: impl Into<LogCall>) {
        self.log(Level::Warn, call);
    }

    /// Emits at [`Level::Error`].
    pub fn error(&self, call: impl Into<LogCall>) {
        self.log(Level::Error, call);
    }

    fn event(&self, level: Level, call: LogCall) -> LogEvent {
        let (markers, message, details) = call.into_parts();
        LogEvent::new(Arc::clone(&self.name), level, message)
            .with_markers(markers)
            .with_details(details)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.config.level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event::{Color, LevelFilter, Markers};
    use logging_sink::{FnSink, MemorySink};

    fn capture(level: LevelFilter) -> (Logger, MemorySink) {
        let config = Arc::new(LoggingConfig::silent(level));
        let sink = MemorySink::new();
        config.add_sink(sink.clone());
        (Logger::with_config("Test", config).unwrap(), sink)
    }

    #[test]
    fn rejects_blank_names() {
        let config = Arc::new(LoggingConfig::silent(LevelFilter::Debug));
        assert_eq!(
            Logger::with_config("", Arc::clone(&config)).unwrap_err(),
            LoggerError::EmptyName
        );
        assert_eq!(
            Logger::with_config(" \t", config).unwrap_err(),
            LoggerError::EmptyName
        );
    }

    #[test]
    fn create_binds_to_the_global_configuration() {
        let log = Logger::create("App").unwrap();
        assert!(Arc::ptr_eq(log.config(), LoggingConfig::global()));
        assert_eq!(Logger::create("").unwrap_err(), LoggerError::EmptyName);
    }

    #[test]
    fn keeps_name_verbatim() {
        let config = Arc::new(LoggingConfig::silent(LevelFilter::Debug));
        let log = Logger::with_config(" Storage ", config).unwrap();
        assert_eq!(log.name(), " Storage ");
    }

    #[test]
    fn severity_methods_set_level_and_color() {
        let (log, sink) = capture(LevelFilter::Verbose);
        log.verbose("v");
        log.debug("d");
        log.info("i");
        log.warn("w");
        log.error("e");

        let seen: Vec<(Level, Color)> = sink
            .events()
            .iter()
            .map(|event| (event.level(), event.color()))
            .collect();
        assert_eq!(
            seen,
            [
                (Level::Verbose, Color::Default),
                (Level::Debug, Color::Default),
                (Level::Info, Color::Blue),
                (Level::Warn, Color::Orange),
                (Level::Error, Color::Red),
            ]
        );
    }

    #[test]
    fn suppressed_calls_build_nothing() {
        let (log, sink) = capture(LevelFilter::Warn);
        log.info("hidden");
        assert!(sink.is_empty());
        assert!(!log.enabled(Level::Info));
    }

    #[test]
    fn event_carries_logger_name_and_parts() {
        let (log, sink) = capture(LevelFilter::Debug);
        log.info((Markers::from([("user", "a")]), "hello"));
        let event = &sink.events()[0];
        assert_eq!(event.logger(), "Test");
        assert_eq!(event.message(), "hello");
        assert_eq!(event.markers().get("user"), Some("a"));
    }

    #[test]
    fn try_log_reports_gating_and_failures() {
        let (log, _sink) = capture(LevelFilter::Info);
        assert!(!log.try_log(Level::Debug, "x").unwrap());
        assert!(log.try_log(Level::Info, "x").unwrap());

        log.config()
            .add_sink(FnSink::new(|_: &LogEvent| Err(SinkError::other("boom"))));
        let err = log.try_log(Level::Error, "x").unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(log.config().failed_deliveries(), 0);
    }

    #[test]
    fn plain_log_absorbs_failures() {
        let (log, sink) = capture(LevelFilter::Debug);
        log.config()
            .add_sink(FnSink::new(|_: &LogEvent| Err(SinkError::other("boom"))));
        log.config().set_failure_handler(|_| {});
        log.error("still delivered to earlier sinks");
        assert_eq!(sink.len(), 1);
        assert_eq!(log.config().failed_deliveries(), 1);
    }

    #[test]
    fn clones_share_configuration() {
        let (log, sink) = capture(LevelFilter::Debug);
        let other = log.clone();
        other.config().set_level(LevelFilter::Error);
        log.warn("hidden");
        assert!(sink.is_empty());
    }
}
