//! Adapter between the jsonbind tree and `serde_json::Value`.
//!
//! The mapping is total and node-by-node for all six kinds, with one
//! documented tradeoff: jsonbind numbers carry exact decimal text, while
//! `serde_json::Number` is i64/u64/f64 — numbers that fit an integer map
//! exactly, anything else narrows to the closest f64. Object field order
//! survives both directions (`serde_json` is built with `preserve_order`).

use jsonbind_core::{JsonNode, JsonNumber, JsonObject};
use serde_json::{Map, Number, Value};

/// Converts a jsonbind tree into a `serde_json::Value`.
///
/// Numbers outside i64/u64 range (or with a fractional part) narrow to f64;
/// a number no f64 can approximate at all (only possible for raw text with
/// an astronomically large exponent) maps to `Value::Null`.
pub fn to_value(node: &JsonNode) -> Value {
    match node {
        JsonNode::Null => Value::Null,
        JsonNode::Bool(b) => Value::Bool(*b),
        JsonNode::Num(num) => number_to_value(num),
        JsonNode::Str(s) => Value::String(s.clone()),
        JsonNode::Array(values) => Value::Array(values.iter().map(to_value).collect()),
        JsonNode::Object(fields) => {
            let mut map = Map::new();
            for (key, value) in fields.iter() {
                map.insert(key.to_string(), to_value(value));
            }
            Value::Object(map)
        }
    }
}

/// Converts a `serde_json::Value` into a jsonbind tree.
pub fn from_value(value: &Value) -> JsonNode {
    match value {
        Value::Null => JsonNode::Null,
        Value::Bool(b) => JsonNode::Bool(*b),
        Value::Number(num) => JsonNode::Num(
            JsonNumber::from_raw(num.to_string())
                .expect("serde_json renders numbers in JSON grammar"),
        ),
        Value::String(s) => JsonNode::Str(s.clone()),
        Value::Array(values) => JsonNode::Array(values.iter().map(from_value).collect()),
        Value::Object(map) => {
            let mut fields = JsonObject::new();
            for (key, value) in map {
                fields.insert(key.clone(), from_value(value));
            }
            JsonNode::Object(fields)
        }
    }
}

fn number_to_value(num: &JsonNumber) -> Value {
    if let Some(i) = num.as_i64() {
        return Value::Number(Number::from(i));
    }
    if let Some(u) = num.as_u64() {
        return Value::Number(Number::from(u));
    }
    match num.as_f64().and_then(Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::Null,
    }
}
