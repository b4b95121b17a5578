//! Conversion between Firestore typed values and plain JSON.
//!
//! Firestore wraps every value in a single-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "12"}`, ...). Listings hand
//! plain JSON to callers, so documents are unwrapped on the way out.

use serde_json::{Map, Value, json};

pub fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

pub fn timestamp_value(rfc3339: &str) -> Value {
    json!({ "timestampValue": rfc3339 })
}

/// Unwrap a document's `fields` map.
pub fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), decode_value(v)))
        .collect()
}

/// Unwrap one typed value. Unrecognised shapes decode to `null`.
pub fn decode_value(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = obj.iter().next() else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" | "booleanValue"
        | "doubleValue" | "geoPointValue" => inner.clone(),
        // int64 travels as a decimal string
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| inner.clone()),
            other => other.clone(),
        },
        "nullValue" => Value::Null,
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => Value::Object(decode_fields(fields)),
            None => Value::Object(Map::new()),
        },
        "arrayValue" => match inner.get("values").and_then(Value::as_array) {
            Some(values) => Value::Array(values.iter().map(decode_value).collect()),
            None => Value::Array(Vec::new()),
        },
        _ => Value::Null,
    }
}
