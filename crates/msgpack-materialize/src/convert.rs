//! Conversions between decoded/materialized values and `serde_json`.
//!
//! These are interop and debugging helpers, not part of the conversion
//! engine proper. `native_to_json` is lossy at documented edges (binary
//! data, out-of-range integers, non-finite floats, non-string keys); the
//! materializer itself never is.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde_json::Value as JsonValue;

use crate::{NativeValue, Value};

/// Prefix for binary data embedded in JSON strings.
const DATA_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Build a decoded [`Value`] tree from a `serde_json::Value`.
///
/// Strings become `Raw` UTF-8 bytes (the wire format carries no text type),
/// integral numbers become `Int`, everything else maps one-to-one.
pub fn json_to_value(v: &JsonValue) -> Value {
    match v {
        JsonValue::Null => Value::Nil,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(BigInt::from(i))
            } else if let Some(u) = n.as_u64() {
                Value::Int(BigInt::from(u))
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => Value::Raw(s.as_bytes().to_vec()),
        JsonValue::Array(xs) => Value::Array(xs.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Map(
            obj.iter()
                .map(|(k, v)| (Value::Raw(k.as_bytes().to_vec()), json_to_value(v)))
                .collect(),
        ),
    }
}

/// Project a materialized [`NativeValue`] graph onto `serde_json::Value`.
///
/// Bytes become `data:application/octet-stream;base64,…` strings, symbols
/// become plain strings, integers outside the `i64`/`u64` range become
/// decimal strings, and non-finite floats become null.
pub fn native_to_json(v: &NativeValue) -> JsonValue {
    match v {
        NativeValue::Nil => JsonValue::Null,
        NativeValue::Bool(b) => JsonValue::Bool(*b),
        NativeValue::Int(n) => JsonValue::from(*n),
        NativeValue::BigInt(n) => {
            if let Some(i) = n.to_i64() {
                JsonValue::from(i)
            } else if let Some(u) = n.to_u64() {
                JsonValue::from(u)
            } else {
                JsonValue::String(n.to_string())
            }
        }
        NativeValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        NativeValue::Str(s) => JsonValue::String(s.clone()),
        NativeValue::Symbol(s) => JsonValue::String(s.as_str().to_owned()),
        NativeValue::Bytes(b) => {
            JsonValue::String(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(b)))
        }
        NativeValue::Array(xs) => JsonValue::Array(xs.iter().map(native_to_json).collect()),
        NativeValue::Map(m) => JsonValue::Object(
            m.iter()
                .map(|(k, v)| (key_string(k), native_to_json(v)))
                .collect(),
        ),
    }
}

/// JSON object keys must be strings; render non-textual keys through their
/// JSON projection.
fn key_string(key: &NativeValue) -> String {
    match key {
        NativeValue::Str(s) => s.clone(),
        NativeValue::Symbol(s) => s.as_str().to_owned(),
        other => match native_to_json(other) {
            JsonValue::String(s) => s,
            json => json.to_string(),
        },
    }
}
