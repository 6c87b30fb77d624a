//! Raw project records as returned by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{AttrValue, DisplayRecord};

/// A project record exactly as the server sent it.
///
/// There is no schema: any field may be missing, wrapped in a typed
/// envelope, or named by one of several aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Create a record from any JSON value.
    ///
    /// Values that are not objects carry no fields and become an empty
    /// record, which still normalizes to a full set of defaults.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Get a field, still wrapped.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a field with any typed envelope unwrapped.
    pub fn attr(&self, key: &str) -> Option<AttrValue> {
        self.0.get(key).map(AttrValue::decode)
    }

    /// Iterate over the raw fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalize into the canonical display shape.
    pub fn normalize(&self) -> DisplayRecord {
        DisplayRecord::from_raw(self)
    }
}
