#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/event/src/lib.rs
//!
//! # Overview
//!
//! `event` holds the vocabulary shared by every marklog crate: the call-site
//! [`Level`], the threshold [`LevelFilter`], the advisory [`Color`], the
//! structured [`Markers`] map, [`Detail`] values and the finished
//! [`LogEvent`] record that sinks receive.
//!
//! # Design
//!
//! Severity is split into two types. [`Level`] names the five severities a
//! call can be made at; [`LevelFilter`] adds the `none` sentinel that only a
//! configuration may hold. Both share discriminants, so gating is a single
//! byte comparison via [`LevelFilter::permits`].
//!
//! # Invariants
//!
//! - `verbose < debug < info < warn < error < none`.
//! - A [`LogEvent`]'s color is a function of its level.
//! - A [`LogEvent`] always carries a marker map, possibly empty.
//!
//! # Examples
//!
//! ```
//! use event::{Detail, Level, LevelFilter, LogEvent, Markers};
//!
//! let event = LogEvent::new("Disk", Level::Warn, "disk low")
//!     .with_markers(Markers::from([("pct", "95")]))
//!     .with_details(vec![Detail::from(3)]);
//!
//! assert!(LevelFilter::Info.permits(event.level()));
//! assert_eq!(event.color().as_str(), "orange");
//! ```

mod color;
mod detail;
mod error;
mod level;
mod log_event;
mod markers;

pub use color::Color;
pub use detail::Detail;
pub use error::ParseLevelError;
pub use level::{Level, LevelFilter};
pub use log_event::LogEvent;
pub use markers::{Iter as MarkersIter, Markers};
