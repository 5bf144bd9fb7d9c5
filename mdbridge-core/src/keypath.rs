//! Dot-separated key paths over nested JSON documents.
//!
//! A key path like `client.0.app_id` names a traversal route through nested
//! JSON objects. Resolution is all-or-nothing: either every segment resolves
//! to an object entry and the final value is a string, or a typed error
//! describes exactly where traversal stopped.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::KeyPathError;

/// A parsed, non-empty sequence of key segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path string into segments.
    ///
    /// Fails with [`KeyPathError::Empty`] when the string is empty or any
    /// segment between dots is empty (e.g. `a..b`).
    pub fn parse(raw: &str) -> Result<Self, KeyPathError> {
        if raw.is_empty() {
            return Err(KeyPathError::Empty);
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(KeyPathError::Empty);
        }
        Ok(Self { segments })
    }

    /// The individual key segments, in traversal order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk the document segment by segment and return the final string value.
    ///
    /// Every intermediate value must be a JSON object containing the next
    /// key; the final value must be a string. No partial result is produced
    /// on failure.
    pub fn resolve<'a>(&self, doc: &'a Value) -> Result<&'a str, KeyPathError> {
        let mut current = doc;
        for key in &self.segments {
            let obj = current.as_object().ok_or_else(|| KeyPathError::NotAnObject {
                key: key.clone(),
                path: self.to_string(),
            })?;
            current = obj.get(key).ok_or_else(|| KeyPathError::MissingKey {
                key: key.clone(),
                path: self.to_string(),
            })?;
        }
        current.as_str().ok_or_else(|| KeyPathError::NotAString {
            path: self.to_string(),
            found: json_type_name(current).to_string(),
        })
    }
}

impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Human-readable name of a JSON value's type, for diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
