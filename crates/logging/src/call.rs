//! crates/logging/src/call.rs
//! The two call shapes a severity method accepts.

use std::fmt;

use event::{Detail, Markers};

/// Arguments of one log call.
///
/// A call is either a plain message or a message preceded by markers; both
/// shapes may carry trailing detail values. Severity methods accept anything
/// that converts into a `LogCall`, so the common case stays a bare string:
///
/// ```
/// use logging::{LogCall, Markers};
///
/// let plain: LogCall = "hello".into();
/// assert!(plain.markers().is_none());
///
/// let marked = LogCall::marked(Markers::from([("user", "a")]), "hello").detail(42);
/// assert_eq!(marked.markers().unwrap().get("user"), Some("a"));
/// assert_eq!(marked.details().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum LogCall {
    /// `message, details...`
    Message {
        /// The log message.
        message: String,
        /// Values rendered after the message.
        details: Vec<Detail>,
    },
    /// `markers, message, details...`
    Marked {
        /// Structured metadata for this call.
        markers: Markers,
        /// The log message.
        message: String,
        /// Values rendered after the message.
        details: Vec<Detail>,
    },
}

impl LogCall {
    /// A plain message call.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// A call carrying markers.
    pub fn marked(markers: Markers, message: impl Into<String>) -> Self {
        Self::Marked {
            markers,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Appends one detail value.
    #[must_use]
    pub fn detail(mut self, detail: impl Into<Detail>) -> Self {
        self.details_mut().push(detail.into());
        self
    }

    /// Appends several detail values in order.
    #[must_use]
    pub fn details_from<I>(mut self, details: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        self.details_mut()
            .extend(details.into_iter().map(Into::into));
        self
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Message { message, .. } | Self::Marked { message, .. } => message,
        }
    }

    /// Markers, when the call has the marked shape.
    #[must_use]
    pub const fn markers(&self) -> Option<&Markers> {
        match self {
            Self::Message { .. } => None,
            Self::Marked { markers, .. } => Some(markers),
        }
    }

    /// Detail values in call order.
    #[must_use]
    pub fn details(&self) -> &[Detail] {
        match self {
            Self::Message { details, .. } | Self::Marked { details, .. } => details,
        }
    }

    /// Normalizes either shape into `(markers, message, details)`; the plain
    /// shape yields an empty marker map.
    #[must_use]
    pub fn into_parts(self) -> (Markers, String, Vec<Detail>) {
        match self {
            Self::Message { message, details } => (Markers::new(), message, details),
            Self::Marked {
                markers,
                message,
                details,
            } => (markers, message, details),
        }
    }

    fn details_mut(&mut self) -> &mut Vec<Detail> {
        match self {
            Self::Message { details, .. } | Self::Marked { details, .. } => details,
        }
    }
}

impl From<&str> for LogCall {
    fn from(message: &str) -> Self {
        Self::message(message)
    }
}

impl From<String> for LogCall {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<&String> for LogCall {
    fn from(message: &String) -> Self {
        Self::message(message.as_str())
    }
}

impl From<fmt::Arguments<'_>> for LogCall {
    fn from(message: fmt::Arguments<'_>) -> Self {
        Self::message(message.to_string())
    }
}

impl<S> From<(Markers, S)> for LogCall
where
    S: Into<String>,
{
    fn from((markers, message): (Markers, S)) -> Self {
        Self::marked(markers, message)
    }
}
