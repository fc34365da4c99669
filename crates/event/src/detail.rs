use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// An additional value appended verbatim after the message.
///
/// Values that serialize cleanly are kept as JSON so sinks can forward them
/// structurally. Anything else falls back to its [`Debug`](fmt::Debug)
/// representation, which is what a console would print when inspecting it.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    /// A serializable value.
    Value(Value),
    /// The `Debug` rendering of a value that could not be serialized.
    Inspect(String),
}

impl Detail {
    /// Captures `value` as JSON, falling back to its `Debug` text when
    /// serialization fails (for example maps with non-string keys).
    pub fn serialize<T>(value: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(json) => Self::Value(json),
            Err(_) => Self::inspect(value),
        }
    }

    /// Captures the `Debug` rendering of `value`.
    pub fn inspect<T>(value: &T) -> Self
    where
        T: fmt::Debug + ?Sized,
    {
        Self::Inspect(format!("{value:?}"))
    }

    /// Returns the JSON value when this detail was serializable.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Inspect(_) => None,
        }
    }
}

/// Strings render without quotes; other JSON values render compactly.
impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(Value::String(text)) | Self::Inspect(text) => f.write_str(text),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

impl From<Value> for Detail {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Detail {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Detail {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

macro_rules! detail_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Detail {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

detail_from_scalar!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// JSON has no NaN or infinity; keep those as their text instead of `null`.
macro_rules! detail_from_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Detail {
                fn from(value: $ty) -> Self {
                    if value.is_finite() {
                        Self::Value(Value::from(value))
                    } else {
                        Self::Inspect(value.to_string())
                    }
                }
            }
        )*
    };
}

detail_from_float!(f32, f64);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn strings_render_raw() {
        assert_eq!(Detail::from("hello").to_string(), "hello");
        assert_eq!(Detail::from(String::from("x y")).to_string(), "x y");
    }

    #[test]
    fn numbers_and_bools_render_as_json() {
        assert_eq!(Detail::from(42).to_string(), "42");
        assert_eq!(Detail::from(1.5).to_string(), "1.5");
        assert_eq!(Detail::from(true).to_string(), "true");
    }

    #[test]
    fn non_finite_floats_keep_their_text() {
        assert_eq!(Detail::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Detail::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Detail::from(f32::NEG_INFINITY).to_string(), "-inf");
        assert!(Detail::from(f64::NAN).as_json().is_none());
        assert_eq!(Detail::from(2.5_f32).as_json(), Some(&Value::from(2.5_f32)));
    }

    #[test]
    fn serialize_keeps_structure() {
        #[derive(Debug, Serialize)]
        struct Quote {
            symbol: &'static str,
            bid: u32,
        }

        let detail = Detail::serialize(&Quote {
            symbol: "EURUSD",
            bid: 108,
        });
        assert_eq!(detail.to_string(), r#"{"bid":108,"symbol":"EURUSD"}"#);
        assert!(detail.as_json().is_some());
    }

    #[test]
    fn unserializable_values_fall_back_to_debug() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");

        let detail = Detail::serialize(&map);
        assert!(matches!(detail, Detail::Inspect(_)));
        assert_eq!(detail.to_string(), r#"{(1, 2): "pair"}"#);
    }

    #[test]
    fn inspect_uses_debug_text() {
        let detail = Detail::inspect(&Some("x"));
        assert_eq!(detail.to_string(), "Some(\"x\")");
        assert_eq!(detail.as_json(), None);
    }
}
