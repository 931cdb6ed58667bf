use serde::Serialize;

use crate::{error::Error, interpreter::value::Value};

/// Document key set by `array(...)`.
pub const ARRAY_KEY: &str = "array";

/// The structured result of a parse.
///
/// Holds the values assigned by directives under their fixed keys. Only the
/// `array` key exists today. Unset keys are left out of the serialized
/// output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    array: Option<Value>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the elements of an `array(...)` directive, returning the
    /// array it replaces.
    pub fn set_array(&mut self, values: Vec<Value>) -> Option<Value> {
        self.array.replace(Value::from(values))
    }

    /// The elements stored under `array`, if any.
    #[must_use]
    pub fn array(&self) -> Option<&[Value]> {
        self.array.as_ref().and_then(Value::as_array)
    }

    /// Looks up a value by document key.
    ///
    /// ## Example
    /// ```
    /// let doc = deftoml::parse_str("array(1)").unwrap();
    /// assert!(doc.get("array").is_some());
    /// assert!(doc.get("other").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            ARRAY_KEY => self.array.as_ref(),
            _ => None,
        }
    }

    /// Returns whether no key has been set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.array.is_none()
    }

    /// Renders the document as TOML.
    ///
    /// # Errors
    /// `Error::Serialize` if the TOML serializer rejects the document.
    ///
    /// # Example
    /// ```
    /// let doc = deftoml::parse_str("def X = 5\narray([[a]], X, $X + 1$)").unwrap();
    /// assert_eq!(doc.to_toml().unwrap(), "array = [\"a\", 5, 6]\n");
    /// ```
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}
