//! Payload field resolution
//!
//! Widget payloads come from an upstream resolver and are only loosely
//! shaped. Every accessor here takes a list of candidate keys (first non-null
//! wins) and a default, so a missing or malformed field degrades to the
//! default instead of failing the export.

use crate::domain::Cell;
use serde_json::Value;

/// First non-null value among `keys`
fn lookup<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

/// Resolves a numeric field
///
/// Accepts JSON numbers and numeric strings. Anything else, including an
/// absent key, resolves to `default`.
pub fn number(record: &Value, keys: &[&str], default: i64) -> Cell {
    match lookup(record, keys) {
        Some(value @ Value::Number(_)) => Cell::from_json(value),
        Some(Value::String(s)) => parse_number(s).unwrap_or(Cell::Integer(default)),
        _ => Cell::Integer(default),
    }
}

/// Resolves a scalar display field
///
/// Strings, numbers and booleans are kept as they are. Absent, null, list
/// and object values resolve to `default`.
pub fn scalar(record: &Value, keys: &[&str], default: &str) -> Cell {
    match lookup(record, keys) {
        Some(value @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
            Cell::from_json(value)
        }
        _ => Cell::Text(default.to_string()),
    }
}

/// Resolves a text field, rendering scalars as text
pub fn text(record: &Value, keys: &[&str], default: &str) -> String {
    match lookup(record, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => value.to_string(),
        _ => default.to_string(),
    }
}

/// Items of a list-valued payload field
///
/// A payload that is itself a list is treated as that list.
pub fn list<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    match payload {
        Value::Array(items) => items,
        Value::Object(_) => match payload.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}

/// Whether a payload carries nothing at all
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn parse_number(raw: &str) -> Option<Cell> {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Cell::Integer(i));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .map(Cell::Float)
}
