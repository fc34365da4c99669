//! crates/logging/src/macros.rs
//! Convenience macros for building markers and emitting formatted calls.

/// Builds a [`Markers`](crate::Markers) map from `key => value` pairs.
///
/// Values may be anything implementing [`Display`](std::fmt::Display).
///
/// ```
/// use logging::markers;
///
/// let markers = markers! { "user" => "a", "pct" => 95 };
/// assert_eq!(markers.to_string(), "{pct=95, user=a}");
/// assert!(markers! {}.is_empty());
/// ```
#[macro_export]
macro_rules! markers {
    () => {
        $crate::Markers::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut markers = $crate::Markers::new();
        $(
            markers.insert($key, ::std::string::ToString::to_string(&$value));
        )+
        markers
    }};
}

/// Emits a formatted call at an explicit level.
///
/// The format arguments are only evaluated when the logger's threshold
/// permits the level. An optional `{ key => value, ... };` block before the
/// format string attaches markers.
///
/// ```
/// use std::sync::Arc;
/// use logging::{Level, LevelFilter, Logger, LoggingConfig, MemorySink, log_at};
///
/// let config = Arc::new(LoggingConfig::silent(LevelFilter::Debug));
/// let captured = MemorySink::new();
/// config.add_sink(captured.clone());
/// let log = Logger::with_config("Jobs", config)?;
///
/// log_at!(log, Level::Info, { "job" => 7 }; "finished in {}ms", 12);
/// let event = &captured.events()[0];
/// assert_eq!(event.message(), "finished in 12ms");
/// assert_eq!(event.markers().get("job"), Some("7"));
/// # Ok::<(), logging::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, { $($key:expr => $value:expr),* $(,)? }; $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(
                level,
                $crate::LogCall::marked(
                    $crate::markers! { $($key => $value),* },
                    ::std::format!($($arg)+),
                ),
            );
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, $crate::LogCall::message(::std::format!($($arg)+)));
        }
    }};
}

/// [`log_at!`] at [`Level::Verbose`](crate::Level::Verbose).
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Verbose, $($rest)+)
    };
}

/// [`log_at!`] at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Debug, $($rest)+)
    };
}

/// [`log_at!`] at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Info, $($rest)+)
    };
}

/// [`log_at!`] at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Warn, $($rest)+)
    };
}

/// [`log_at!`] at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Error, $($rest)+)
    };
}
