//! A requisition document as read back from the store.

use crate::fields;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Document id plus its stored field map.
///
/// Serializes flat as `{ "id": ..., ...fields }`. The document id always
/// wins over a stored field that happens to be called `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Requisition {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Requisition {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// A stored field, if it holds a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn pending_action(&self) -> Option<&str> {
        self.get_str(fields::PENDING_ACTION)
    }

    /// Parsed `updatedAt`, if present and in RFC 3339 form.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.get_str(fields::UPDATED_AT)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Serialize for Requisition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = self.fields.keys().filter(|k| *k != fields::ID).count();
        let mut map = serializer.serialize_map(Some(extra + 1))?;
        map.serialize_entry(fields::ID, &self.id)?;
        for (key, value) in &self.fields {
            if key != fields::ID {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}
