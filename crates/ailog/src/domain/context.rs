//! Structured context attached to log events

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Caller-supplied structured fields for one log event
///
/// Wraps a JSON object whose keys serialize in insertion order (serde_json's
/// `preserve_order` feature), so rendered context is deterministic.
///
/// Values that cannot be represented as JSON are degraded to their `Debug`
/// string rather than failing the emission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context(Map<String, Value>);

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a field, degrading unserializable values to their Debug string
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize + fmt::Debug) {
        let value = match serde_json::to_value(&value) {
            Ok(v) => v,
            Err(_) => Value::String(format!("{value:?}")),
        };
        self.0.insert(key.into(), value);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize + fmt::Debug) -> Self {
        self.insert(key, value);
        self
    }

    /// Overlay every entry of `other` onto this context
    ///
    /// Entries from `other` replace existing entries with the same key.
    pub fn merge(&mut self, other: Context) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Context {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Context> for Value {
    fn from(context: Context) -> Self {
        Value::Object(context.0)
    }
}

impl Serialize for Context {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
