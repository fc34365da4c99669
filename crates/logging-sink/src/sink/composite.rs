use std::fmt;

use event::LogEvent;

use super::Sink;
use crate::error::{SinkError, SinkResult};

/// What a [`CompositeSink`] does when one of its children fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeliveryPolicy {
    /// Keep delivering to the remaining children, then report every failure.
    ///
    /// A single failure is returned as-is; several are wrapped in
    /// [`SinkError::Composite`] in child order.
    #[default]
    Isolate,
    /// Return the first failure and skip the remaining children.
    StopOnFirstError,
}

/// Fans one event out to an ordered list of child sinks.
///
/// Children receive the same event reference, one after the other, in the
/// order they were added. Children can be appended at any time but never
/// removed.
///
/// # Examples
///
/// ```
/// use event::{Level, LogEvent};
/// use logging_sink::{CompositeSink, MemorySink, Sink};
///
/// let first = MemorySink::new();
/// let second = MemorySink::new();
/// let mut composite = CompositeSink::new();
/// composite.push(first.clone());
/// composite.push(second.clone());
///
/// composite.log(&LogEvent::new("x", Level::Info, "fan out"))?;
/// assert_eq!(first.len(), 1);
/// assert_eq!(second.len(), 1);
/// # Ok::<(), logging_sink::SinkError>(())
/// ```
#[derive(Default)]
pub struct CompositeSink {
    children: Vec<Box<dyn Sink>>,
    policy: DeliveryPolicy,
}

impl CompositeSink {
    /// Creates an empty composite with the default [`DeliveryPolicy::Isolate`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composite that owns `children`.
    #[must_use]
    pub fn with_children(children: Vec<Box<dyn Sink>>) -> Self {
        Self {
            children,
            policy: DeliveryPolicy::default(),
        }
    }

    /// Replaces the failure policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DeliveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The failure policy in effect.
    #[must_use]
    pub const fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Appends a child.
    pub fn push<S>(&mut self, sink: S)
    where
        S: Sink + 'static,
    {
        self.children.push(Box::new(sink));
    }

    /// Appends an already boxed child.
    pub fn push_boxed(&mut self, sink: Box<dyn Sink>) {
        self.children.push(sink);
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Reports whether the composite has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Extend<Box<dyn Sink>> for CompositeSink {
    fn extend<I: IntoIterator<Item = Box<dyn Sink>>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

impl FromIterator<Box<dyn Sink>> for CompositeSink {
    fn from_iter<I: IntoIterator<Item = Box<dyn Sink>>>(iter: I) -> Self {
        Self::with_children(iter.into_iter().collect())
    }
}

impl Sink for CompositeSink {
    fn log(&self, event: &LogEvent) -> SinkResult {
        match self.policy {
            DeliveryPolicy::StopOnFirstError => {
                for child in &self.children {
                    child.log(event)?;
                }
                Ok(())
            }
            DeliveryPolicy::Isolate => {
                let mut failures: Vec<SinkError> = self
                    .children
                    .iter()
                    .filter_map(|child| child.log(event).err())
                    .collect();
                match failures.len() {
                    0 => Ok(()),
                    1 => Err(failures.remove(0)),
                    _ => Err(SinkError::Composite(failures)),
                }
            }
        }
    }
}

impl fmt::Debug for CompositeSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSink")
            .field("children", &self.children.len())
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{FnSink, MemorySink};
    use event::Level;
    use std::sync::{Arc, Mutex};

    fn event(message: &str) -> LogEvent {
        LogEvent::new("Composite", Level::Info, message)
    }

    type Order = Arc<Mutex<Vec<&'static str>>>;

    fn recorder(
        name: &'static str,
        order: Order,
    ) -> FnSink<impl Fn(&LogEvent) -> SinkResult + Send + Sync> {
        FnSink::new(move |_: &LogEvent| {
            order.lock().expect("order lock").push(name);
            Ok(())
        })
    }

    fn failing(
        message: &'static str,
    ) -> FnSink<impl Fn(&LogEvent) -> SinkResult + Send + Sync> {
        FnSink::new(move |_: &LogEvent| Err(SinkError::other(message)))
    }

    #[test]
    fn empty_composite_accepts_events() {
        let composite = CompositeSink::new();
        assert!(composite.is_empty());
        assert!(composite.log(&event("nobody listens")).is_ok());
    }

    #[test]
    fn children_see_events_in_registration_order() {
        let order: Order = Arc::new(Mutex::new(Vec::new()));
        let mut composite = CompositeSink::new();
        composite.push(recorder("a", Arc::clone(&order)));
        composite.push(recorder("b", Arc::clone(&order)));
        composite.push(recorder("c", Arc::clone(&order)));

        composite.log(&event("one")).unwrap();
        composite.log(&event("two")).unwrap();

        assert_eq!(*order.lock().unwrap(), ["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn children_receive_the_same_event() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let composite: CompositeSink = [
            Box::new(first.clone()) as Box<dyn Sink>,
            Box::new(second.clone()),
        ]
        .into_iter()
        .collect();

        let sent = event("same");
        composite.log(&sent).unwrap();

        assert_eq!(first.events(), vec![sent.clone()]);
        assert_eq!(second.events(), vec![sent]);
    }

    #[test]
    fn late_children_only_see_later_events() {
        let early = MemorySink::new();
        let late = MemorySink::new();
        let mut composite = CompositeSink::new();
        composite.push(early.clone());

        composite.log(&event("before")).unwrap();
        composite.extend([Box::new(late.clone()) as Box<dyn Sink>]);
        composite.log(&event("after")).unwrap();

        assert_eq!(early.len(), 2);
        assert_eq!(late.len(), 1);
        assert_eq!(late.events()[0].message(), "after");
    }

    #[test]
    fn isolate_keeps_delivering_after_a_failure() {
        let after = MemorySink::new();
        let mut composite = CompositeSink::new();
        composite.push(failing("console detached"));
        composite.push(after.clone());

        let err = composite.log(&event("still delivered")).unwrap_err();

        assert_eq!(after.len(), 1);
        assert!(matches!(err, SinkError::Other(ref text) if text == "console detached"));
    }

    #[test]
    fn isolate_collects_every_failure() {
        let mut composite = CompositeSink::new();
        composite.push(failing("first"));
        composite.push(failing("second"));

        let err = composite.log(&event("x")).unwrap_err();
        assert!(matches!(err, SinkError::Composite(ref failures) if failures.len() == 2));
        assert_eq!(err.failure_count(), 2);
    }

    #[test]
    fn stop_on_first_error_skips_remaining_children() {
        let after = MemorySink::new();
        let mut composite = CompositeSink::new().with_policy(DeliveryPolicy::StopOnFirstError);
        composite.push(failing("boom"));
        composite.push(after.clone());

        assert!(composite.log(&event("x")).is_err());
        assert!(after.is_empty());
    }

    #[test]
    fn nested_composites_deliver_to_leaves() {
        let leaf = MemorySink::new();
        let mut inner = CompositeSink::new();
        inner.push(leaf.clone());
        let mut outer = CompositeSink::new();
        outer.push(inner);

        outer.log(&event("deep")).unwrap();
        assert_eq!(leaf.len(), 1);
    }

    #[test]
    fn debug_reports_child_count() {
        let mut composite = CompositeSink::new();
        composite.push(MemorySink::new());
        let debug = format!("{composite:?}");
        assert!(debug.contains("children: 1"));
        assert!(debug.contains("Isolate"));
    }
}
