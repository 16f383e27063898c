//! Codec between plain JSON and Firestore's typed value encoding.
//!
//! The Firestore REST API wraps every field in a type marker, so the JSON
//! object `{"price": 1200}` travels as
//! `{"price": {"integerValue": "1200"}}`. This module converts between the
//! two shapes; the rest of the crate only ever sees plain JSON.

use crate::error::{StoreError, StoreResult};
use serde_json::{json, Map, Value};

/// Encode a plain JSON object into Firestore `fields` form.
pub fn encode_fields(fields: &Map<String, Value>) -> Value {
    let mut encoded = Map::new();
    for (key, value) in fields {
        encoded.insert(key.clone(), encode_value(value));
    }
    Value::Object(encoded)
}

/// Encode one plain JSON value into its typed form.
///
/// Integers become `integerValue` (which Firestore transports as a decimal
/// string), other numbers become `doubleValue`.
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(flag) => json!({ "booleanValue": flag }),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                json!({ "integerValue": int.to_string() })
            } else {
                json!({ "doubleValue": number.as_f64() })
            }
        }
        Value::String(text) => json!({ "stringValue": text }),
        Value::Array(entries) => {
            let values: Vec<Value> = entries.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Decode a Firestore `fields` object into a plain JSON object.
pub fn decode_fields(fields: &Value) -> StoreResult<Map<String, Value>> {
    let object = fields.as_object().ok_or_else(|| {
        StoreError::InvalidDocument("document fields are not an object".to_string())
    })?;

    let mut decoded = Map::new();
    for (key, value) in object {
        decoded.insert(key.clone(), decode_value(value));
    }
    Ok(decoded)
}

/// Decode one typed value into plain JSON.
///
/// Timestamps decode to their RFC 3339 string; value types this service
/// never writes (bytes, geo points, references) decode to null rather than
/// failing the whole document.
pub fn decode_value(value: &Value) -> Value {
    let object = match value.as_object() {
        Some(object) => object,
        None => return Value::Null,
    };

    if let Some(text) = object.get("stringValue").and_then(Value::as_str) {
        return Value::String(text.to_string());
    }
    if let Some(flag) = object.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(flag);
    }
    if let Some(int) = object.get("integerValue") {
        // Sent as a decimal string; accept a bare number too
        if let Some(text) = int.as_str() {
            if let Ok(parsed) = text.parse::<i64>() {
                return Value::from(parsed);
            }
        }
        if let Some(parsed) = int.as_i64() {
            return Value::from(parsed);
        }
        return Value::Null;
    }
    if let Some(double) = object.get("doubleValue").and_then(Value::as_f64) {
        return Value::from(double);
    }
    if let Some(timestamp) = object.get("timestampValue").and_then(Value::as_str) {
        return Value::String(timestamp.to_string());
    }
    if let Some(entries) = object.get("arrayValue") {
        let values = entries
            .get("values")
            .and_then(Value::as_array)
            .map(|list| list.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }
    if let Some(map) = object.get("mapValue") {
        let mut decoded = Map::new();
        if let Some(fields) = map.get("fields").and_then(Value::as_object) {
            for (key, value) in fields {
                decoded.insert(key.clone(), decode_value(value));
            }
        }
        return Value::Object(decoded);
    }

    Value::Null
}
