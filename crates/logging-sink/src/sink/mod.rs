use std::fmt;
use std::sync::Arc;

use event::LogEvent;

use crate::error::SinkResult;

mod composite;
mod console_sink;
mod memory;

pub use composite::{CompositeSink, DeliveryPolicy};
pub use console_sink::ConsoleSink;
pub use memory::MemorySink;

/// Capability to deliver a finished [`LogEvent`] somewhere.
///
/// Delivery is synchronous: `log` returns once the event has been written,
/// stored or forwarded. Implementations that need mutable state guard it
/// internally so a single sink can be shared between threads.
pub trait Sink: Send + Sync {
    /// Delivers `event`.
    fn log(&self, event: &LogEvent) -> SinkResult;
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn log(&self, event: &LogEvent) -> SinkResult {
        (**self).log(event)
    }
}

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn log(&self, event: &LogEvent) -> SinkResult {
        (**self).log(event)
    }
}

/// Adapts a closure into a [`Sink`].
///
/// # Examples
///
/// ```
/// use event::{Level, LogEvent};
/// use logging_sink::{FnSink, Sink};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let seen = AtomicUsize::new(0);
/// let sink = FnSink::new(|_event: &LogEvent| {
///     seen.fetch_add(1, Ordering::Relaxed);
///     Ok(())
/// });
///
/// sink.log(&LogEvent::new("x", Level::Info, "hi")).unwrap();
/// assert_eq!(seen.load(Ordering::Relaxed), 1);
/// ```
pub struct FnSink<F> {
    deliver: F,
}

impl<F> FnSink<F>
where
    F: Fn(&LogEvent) -> SinkResult + Send + Sync,
{
    /// Wraps `deliver`.
    pub const fn new(deliver: F) -> Self {
        Self { deliver }
    }
}

impl<F> Sink for FnSink<F>
where
    F: Fn(&LogEvent) -> SinkResult + Send + Sync,
{
    fn log(&self, event: &LogEvent) -> SinkResult {
        (self.deliver)(event)
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}
