//! crates/logging/src/config.rs
//! Threshold and root sink shared by every logger bound to a configuration.

use std::cell::Cell;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use event::{Level, LevelFilter, LogEvent};
use logging_sink::{CompositeSink, ConsoleSink, Sink, SinkError, SinkResult};

use crate::settings::LoggingSettings;

type FailureHandler = Arc<dyn Fn(&SinkError) + Send + Sync>;

static GLOBAL: OnceLock<Arc<LoggingConfig>> = OnceLock::new();

thread_local! {
    /// Set while a failure handler runs on this thread.
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as reporting a failure until dropped.
struct ReportingGuard;

impl ReportingGuard {
    fn enter() -> Option<Self> {
        if REPORTING.with(|flag| flag.replace(true)) {
            None
        } else {
            Some(Self)
        }
    }
}

impl Drop for ReportingGuard {
    fn drop(&mut self) {
        REPORTING.with(|flag| flag.set(false));
    }
}

/// Process-wide logging control: the minimum level and the root sink.
///
/// Loggers hold an `Arc<LoggingConfig>` and consult it on every call, so
/// [`set_level`](Self::set_level) and [`add_sinks`](Self::add_sinks) take
/// effect for every call evaluated afterwards. The threshold lives in an
/// atomic and is read without locking; the root [`CompositeSink`] sits
/// behind a read/write lock that delivery only takes for reading.
///
/// Sinks are only ever added. There is no way to remove a sink or replace
/// the root.
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelFilter, LoggingConfig, MemorySink};
///
/// let config = LoggingConfig::silent(LevelFilter::Info);
/// let captured = MemorySink::new();
/// config.add_sink(captured.clone());
///
/// assert!(!config.enabled(Level::Debug));
/// config.set_level(LevelFilter::Verbose);
/// assert!(config.enabled(Level::Debug));
/// ```
pub struct LoggingConfig {
    level: AtomicU8,
    root: RwLock<CompositeSink>,
    failed_deliveries: AtomicU64,
    on_failure: RwLock<Option<FailureHandler>>,
}

impl LoggingConfig {
    /// Default configuration: level `debug` and one console sink on stdout.
    #[must_use]
    pub fn new() -> Self {
        let mut root = CompositeSink::new();
        root.push(ConsoleSink::stdout());
        Self::with_root(LevelFilter::default(), root)
    }

    /// Configuration with the given threshold and no sinks at all.
    #[must_use]
    pub fn silent(level: LevelFilter) -> Self {
        Self::with_root(level, CompositeSink::new())
    }

    /// Configuration with an explicit threshold and root composite.
    #[must_use]
    pub fn with_root(level: LevelFilter, root: CompositeSink) -> Self {
        Self {
            level: AtomicU8::new(level.as_u8()),
            root: RwLock::new(root),
            failed_deliveries: AtomicU64::new(0),
            on_failure: RwLock::new(None),
        }
    }

    /// Configuration built from [`LoggingSettings`]: the settings' threshold
    /// and one stdout console sink using the settings' color mode.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let mut root = CompositeSink::new();
        root.push(ConsoleSink::stdout().with_color_mode(settings.color));
        Self::with_root(settings.level, root)
    }

    /// The process-wide configuration used by [`Logger::create`](crate::Logger::create).
    ///
    /// Initialised with [`LoggingConfig::new`] on first use unless
    /// [`set_global`](Self::set_global) ran earlier.
    pub fn global() -> &'static Arc<Self> {
        GLOBAL.get_or_init(|| Arc::new(Self::new()))
    }

    /// Installs `config` as the process-wide configuration.
    ///
    /// Only the first installation wins; later attempts, or attempts made
    /// after [`global`](Self::global) already initialised the default, hand
    /// the rejected configuration back.
    pub fn set_global(config: Arc<Self>) -> Result<(), Arc<Self>> {
        GLOBAL.set(config)
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> LevelFilter {
        LevelFilter::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Replaces the threshold for every call evaluated from now on.
    pub fn set_level(&self, level: LevelFilter) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Reports whether a call at `level` passes the current threshold.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.level().permits(level)
    }

    /// Appends sinks to the root composite, in order.
    pub fn add_sinks<I>(&self, sinks: I)
    where
        I: IntoIterator<Item = Box<dyn Sink>>,
    {
        self.root_mut().extend(sinks);
    }

    /// Appends one sink to the root composite.
    pub fn add_sink<S>(&self, sink: S)
    where
        S: Sink + 'static,
    {
        self.root_mut().push(sink);
    }

    /// Number of sinks attached directly to the root.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.root
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Delivers `event` to the root sink and returns any failure.
    ///
    /// This bypasses the threshold and the failure counter; loggers go
    /// through it only after gating.
    pub fn dispatch(&self, event: &LogEvent) -> SinkResult {
        self.root
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .log(event)
    }

    /// Number of emitted events whose delivery failed.
    #[must_use]
    pub fn failed_deliveries(&self) -> u64 {
        self.failed_deliveries.load(Ordering::Relaxed)
    }

    /// Replaces what happens when delivery of an emitted event fails.
    ///
    /// The default writes one line to standard error. The handler runs on the
    /// emitting thread once delivery has returned, with no configuration lock
    /// held, so it may log through the same configuration or replace itself.
    /// Failures raised while a handler is running on that thread are counted
    /// but not reported again.
    pub fn set_failure_handler<F>(&self, handler: F)
    where
        F: Fn(&SinkError) + Send + Sync + 'static,
    {
        *self
            .on_failure
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(handler));
    }

    /// Dispatches an already gated event, absorbing failures.
    pub(crate) fn deliver(&self, event: &LogEvent) {
        if let Err(error) = self.dispatch(event) {
            self.failed_deliveries.fetch_add(1, Ordering::Relaxed);
            if let Some(_reporting) = ReportingGuard::enter() {
                self.report_failure(&error);
            }
        }
    }

    fn report_failure(&self, error: &SinkError) {
        let handler = self
            .on_failure
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match handler {
            Some(handler) => handler(error),
            None => {
                let _ = writeln!(io::stderr().lock(), "marklog: sink delivery failed: {error}");
            }
        }
    }

    fn root_mut(&self) -> std::sync::RwLockWriteGuard<'_, CompositeSink> {
        self.root.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .field("failed_deliveries", &self.failed_deliveries())
            .finish_non_exhaustive()
    }
}
