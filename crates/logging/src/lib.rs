#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the front of the marklog workspace. A [`Logger`] is a named
//! emitter with one method per severity; each call is gated against the
//! threshold held by a [`LoggingConfig`], turned into an
//! [`event::LogEvent`] and delivered synchronously to the configuration's
//! root [`CompositeSink`].
//!
//! # Design
//!
//! - Configuration is an owned [`LoggingConfig`] shared through an `Arc`.
//!   [`Logger::with_config`] injects one explicitly and [`Logger::create`]
//!   uses the lazily initialised process-wide default.
//! - Severity methods accept anything convertible into a [`LogCall`]: a plain
//!   message, or markers plus a message, either of which may carry detail
//!   values.
//! - The threshold is an atomic, so suppressed calls take no lock and build
//!   no event.
//! - [`LoggingSettings`] reads the threshold and color mode from the
//!   environment.
//! - With the `tracing` feature, [`MarklogLayer`] routes `tracing` events
//!   through the same configuration.
//!
//! # Invariants
//!
//! - A call at level `L` is delivered iff `L >= threshold`; the threshold
//!   [`LevelFilter::Off`] suppresses everything.
//! - Sinks added to a configuration only see calls made after they were
//!   added.
//! - Severity methods never return errors and never panic on sink failure.
//!
//! # Errors
//!
//! [`LoggerError`] reports invalid logger names and [`SettingsError`]
//! invalid environment values. Delivery failures are counted by the
//! configuration and passed to its failure handler; [`Logger::try_log`]
//! returns them instead.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Color, LevelFilter, Logger, LoggingConfig, MemorySink, markers};
//!
//! let config = Arc::new(LoggingConfig::new());
//! let captured = MemorySink::new();
//! config.add_sink(captured.clone());
//! config.set_level(LevelFilter::Info);
//!
//! let log = Logger::with_config("Disk", config)?;
//! log.debug("suppressed");
//! log.warn((markers! { "pct" => 95 }, "disk low"));
//!
//! let events = captured.events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].color(), Color::Orange);
//! # Ok::<(), logging::LoggerError>(())
//! ```

mod call;
mod config;
mod error;
mod logger;
mod macros;
mod settings;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call::LogCall;
pub use config::LoggingConfig;
pub use error::{LoggerError, SettingsError};
pub use event::{Color, Detail, Level, LevelFilter, LogEvent, Markers, ParseLevelError};
pub use logger::Logger;
pub use logging_sink::{
    ColorMode, CompositeSink, ConsoleSink, DeliveryPolicy, FnSink, MemorySink,
    ParseColorModeError, Sink, SinkError, SinkResult,
};
pub use settings::{COLOR_ENV, LEVEL_ENV, LoggingSettings, NO_COLOR_ENV};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{MarklogLayer, init_tracing};
