use std::sync::{Arc, Mutex, MutexGuard};

use event::LogEvent;

use super::Sink;
use crate::error::{SinkError, SinkResult};

/// Records delivered events in memory.
///
/// Clones share the same buffer, so a clone can be handed to a
/// [`CompositeSink`](crate::CompositeSink) while the original is kept to
/// inspect what was delivered.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.buffer().clone()
    }

    /// Removes and returns every recorded event.
    pub fn take(&self) -> Vec<LogEvent> {
        std::mem::take(&mut *self.buffer())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Reports whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    // Readers keep working after a panicking writer; the buffer is only ever pushed to.
    fn buffer(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn log(&self, event: &LogEvent) -> SinkResult {
        self.events
            .lock()
            .map_err(|_| SinkError::Poisoned)?
            .push(event.clone());
        Ok(())
    }
}
