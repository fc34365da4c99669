#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the [`Sink`] capability, "deliver a finished
//! [`event::LogEvent`] somewhere", together with the sinks the marklog
//! workspace ships: [`ConsoleSink`] renders one line per event to any
//! [`std::io::Write`] target, [`CompositeSink`] fans an event out to an
//! ordered list of children, and [`MemorySink`] records events for later
//! inspection.
//!
//! # Design
//!
//! Sinks are `Send + Sync` and take `&self`; sinks with mutable state keep it
//! behind a mutex. Delivery is synchronous and returns a [`SinkError`] on
//! failure rather than panicking. How a composite reacts when a child fails
//! is an explicit [`DeliveryPolicy`].
//!
//! # Invariants
//!
//! - A composite delivers the same event reference to every child, in the
//!   order the children were added.
//! - Children are only ever appended.
//! - [`ConsoleSink`] writes each line with a single `write_all` call while
//!   holding its lock, so lines from different threads never interleave.
//!
//! # Errors
//!
//! [`SinkError::Io`] wraps failures from the underlying writer,
//! [`SinkError::Poisoned`] reports a lock abandoned by a panicking thread and
//! [`SinkError::Composite`] groups several child failures.
//!
//! # Examples
//!
//! ```
//! use event::{Level, LogEvent};
//! use logging_sink::{CompositeSink, ConsoleSink, MemorySink, Sink};
//!
//! let captured = MemorySink::new();
//! let mut root = CompositeSink::new();
//! root.push(ConsoleSink::new(std::io::sink()));
//! root.push(captured.clone());
//!
//! root.log(&LogEvent::new("Startup", Level::Info, "ready"))?;
//! assert_eq!(captured.events()[0].message(), "ready");
//! # Ok::<(), logging_sink::SinkError>(())
//! ```

mod color_mode;
mod error;
mod sink;

pub use color_mode::{ColorMode, ParseColorModeError};
pub use error::{SinkError, SinkResult};
pub use sink::{CompositeSink, ConsoleSink, DeliveryPolicy, FnSink, MemorySink, Sink};
