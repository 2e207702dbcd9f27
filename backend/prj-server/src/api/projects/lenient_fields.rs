//! Loose reading of JSON fields in project bodies.
//!
//! Clients send whatever JSON they like. Scalars become text, and the
//! title additionally treats `false`, `0` and `""` as absent.

use serde_json::Value;

/// Strings, numbers and booleans as text. Null, arrays and objects are absent.
pub fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Like [`scalar_text`], with `false` and zero counting as absent.
///
/// An empty string is kept so validation reports it.
pub fn truthy_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::Bool(false)) => None,
        Some(Value::Number(ref n)) if n.as_f64() == Some(0.0) => None,
        other => scalar_text(other),
    }
}
