use std::fmt;

use serde::{Deserialize, Serialize};

/// Advisory display color carried by every event.
///
/// The color is derived from the event's [`Level`](crate::Level); rendering
/// sinks are free to ignore it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// No explicit color; terminals render their default foreground.
    #[default]
    #[serde(rename = "black")]
    Default,
    /// Informational output.
    Blue,
    /// Warnings.
    Orange,
    /// Errors.
    Red,
}

impl Color {
    /// CSS-style color name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "black",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
