//! Coercion of loosely-typed JSON values.
//!
//! Callers send numbers, numeric-looking strings, or categorical tokens;
//! these helpers give each encoding a single view of the raw value.

use serde_json::Value;

/// Numeric view of a raw value: JSON numbers, numeric strings
/// (whitespace tolerated), and booleans as 1/0.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Whether the value counts as missing: absent key, JSON null, or the
/// empty string.
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// String form used for categorical matching. Numbers use their JSON
/// rendering, so `1` matches the token `"1"` but `1.0` does not.
pub fn token_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
