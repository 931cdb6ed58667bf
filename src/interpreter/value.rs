use std::rc::Rc;

use serde::{Serialize, Serializer};

/// Represents a resolved value.
///
/// This enum models every value an expression can produce and every value
/// that can end up in the output document. Sequences are reference counted,
/// so handing a bound value out of the environment never deep-copies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A string, from a `[[text]]` literal or string concatenation.
    Str(String),
    /// A 64-bit signed integer.
    Integer(i64),
    /// An ordered sequence of values, produced by `array(...)`.
    Array(Rc<Vec<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Name of the value's type, used in error messages.
    ///
    /// ## Example
    /// ```
    /// use deftoml::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::from("x").type_name(), "string");
    /// assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Integer(_) => "integer",
            Self::Array(_) => "array",
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Array(items) => serializer.collect_seq(items.iter()),
        }
    }
}

/// Formats values the way they are written in configuration source:
/// strings in `[[...]]`, arrays as comma separated lists.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "[[{s}]]"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Array(items) => {
                write!(f, "array(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            },
        }
    }
}
