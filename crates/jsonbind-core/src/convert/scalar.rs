//! Leaf converters: one scalar node kind, one domain scalar type.
//!
//! `JStringLike` and `JNumberLike` are the two archetypes — a parse/render
//! closure pair over a String or Number node. The concrete converters
//! (`JBool`, `JString`, `JInt`, ...) cover the primitive types directly.

use super::{wrong_kind, JsonConverter};
use crate::error::{JsonError, JsonOutcome};
use crate::node::{JsonNode, JsonNumber, NodeKind};
use crate::path::NodePath;

/// Boolean node to `bool`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JBool;

impl JsonConverter for JBool {
    type T = bool;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<bool> {
        match node {
            JsonNode::Bool(b) => Ok(*b),
            other => Err(wrong_kind(NodeKind::Boolean, other, path)),
        }
    }

    fn to_node(&self, value: &bool) -> JsonNode {
        JsonNode::Bool(*value)
    }
}

/// String node to `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JString;

impl JsonConverter for JString {
    type T = String;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<String> {
        match node {
            JsonNode::Str(s) => Ok(s.clone()),
            other => Err(wrong_kind(NodeKind::String, other, path)),
        }
    }

    fn to_node(&self, value: &String) -> JsonNode {
        JsonNode::Str(value.clone())
    }
}

/// Number node to `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JInt;

impl JsonConverter for JInt {
    type T = i64;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<i64> {
        let num = expect_number(node, path)?;
        num.as_i64()
            .ok_or_else(|| JsonError::value(path, format!("{num} is not an i64")))
    }

    fn to_node(&self, value: &i64) -> JsonNode {
        JsonNode::Num(JsonNumber::from_i64(*value))
    }
}

/// Number node to `u64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JUInt;

impl JsonConverter for JUInt {
    type T = u64;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<u64> {
        let num = expect_number(node, path)?;
        num.as_u64()
            .ok_or_else(|| JsonError::value(path, format!("{num} is not a u64")))
    }

    fn to_node(&self, value: &u64) -> JsonNode {
        JsonNode::Num(JsonNumber::from_u64(*value))
    }
}

/// Number node to `f64`.
///
/// JSON has no literal for NaN or infinities, so non-finite values encode as
/// string nodes (`"NaN"`, `"inf"`, `"-inf"`) and the matching strings decode
/// back. Finite values always use a Number node.
#[derive(Debug, Clone, Copy, Default)]
pub struct JFloat;

impl JsonConverter for JFloat {
    type T = f64;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<f64> {
        match node {
            JsonNode::Num(num) => num
                .as_f64()
                .ok_or_else(|| JsonError::value(path, format!("{num} is not an f64"))),
            JsonNode::Str(s) => match s.parse::<f64>() {
                Ok(f) if !f.is_finite() => Ok(f),
                _ => Err(JsonError::value(
                    path,
                    format!("expected a number or non-finite marker, found \"{s}\""),
                )),
            },
            other => Err(wrong_kind(NodeKind::Number, other, path)),
        }
    }

    fn to_node(&self, value: &f64) -> JsonNode {
        if value.is_finite() {
            JsonNode::Num(JsonNumber::from_f64(*value))
        } else {
            JsonNode::Str(value.to_string())
        }
    }
}

/// Number node passthrough: keeps the exact decimal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JNumber;

impl JsonConverter for JNumber {
    type T = JsonNumber;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<JsonNumber> {
        expect_number(node, path).cloned()
    }

    fn to_node(&self, value: &JsonNumber) -> JsonNode {
        JsonNode::Num(value.clone())
    }
}

fn expect_number<'a>(node: &'a JsonNode, path: &NodePath) -> JsonOutcome<&'a JsonNumber> {
    match node {
        JsonNode::Num(num) => Ok(num),
        other => Err(wrong_kind(NodeKind::Number, other, path)),
    }
}

/// Text-backed leaf converter: a String node to/from `T` through a
/// parse/render closure pair. Used for dates, identifiers, enumerations and
/// anything else serialized as a string.
///
/// ```
/// use jsonbind_core::{JStringLike, JsonConverter};
///
/// let upper = JStringLike::new(
///     |s: &str| Ok::<_, String>(s.to_uppercase()),
///     |v: &String| v.to_lowercase(),
/// );
/// assert_eq!(upper.from_json("\"abc\"").unwrap(), "ABC");
/// ```
pub struct JStringLike<T: 'static> {
    parse: Box<dyn Fn(&str) -> Result<T, String> + Send + Sync>,
    render: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T: 'static> JStringLike<T> {
    pub fn new<P, R>(parse: P, render: R) -> Self
    where
        P: Fn(&str) -> Result<T, String> + Send + Sync + 'static,
        R: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            parse: Box::new(parse),
            render: Box::new(render),
        }
    }
}

impl<T: 'static> JsonConverter for JStringLike<T> {
    type T = T;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<T> {
        match node {
            JsonNode::Str(s) => (self.parse)(s).map_err(|reason| JsonError::value(path, reason)),
            other => Err(wrong_kind(NodeKind::String, other, path)),
        }
    }

    fn to_node(&self, value: &T) -> JsonNode {
        JsonNode::Str((self.render)(value))
    }
}

/// Numeric-backed leaf converter: a Number node to/from `T` through a
/// parse/render closure pair. Used for integral/real domain types and for
/// values serialized as raw numbers, e.g. epoch timestamps.
pub struct JNumberLike<T: 'static> {
    parse: Box<dyn Fn(&JsonNumber) -> Result<T, String> + Send + Sync>,
    render: Box<dyn Fn(&T) -> JsonNumber + Send + Sync>,
}

impl<T: 'static> JNumberLike<T> {
    pub fn new<P, R>(parse: P, render: R) -> Self
    where
        P: Fn(&JsonNumber) -> Result<T, String> + Send + Sync + 'static,
        R: Fn(&T) -> JsonNumber + Send + Sync + 'static,
    {
        Self {
            parse: Box::new(parse),
            render: Box::new(render),
        }
    }
}

impl<T: 'static> JsonConverter for JNumberLike<T> {
    type T = T;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<T> {
        let num = expect_number(node, path)?;
        (self.parse)(num).map_err(|reason| JsonError::value(path, reason))
    }

    fn to_node(&self, value: &T) -> JsonNode {
        JsonNode::Num((self.render)(value))
    }
}

/// Enumeration serialized as a string, over a fixed (name, value) table.
///
/// `to_node` expects every encodable value to appear in the table; a value
/// outside it is a construction bug and panics.
pub struct JEnum<T> {
    variants: Vec<(String, T)>,
}

impl<T: Clone + PartialEq> JEnum<T> {
    pub fn new<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        Self {
            variants: variants
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<T: Clone + PartialEq> JsonConverter for JEnum<T> {
    type T = T;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<T> {
        match node {
            JsonNode::Str(s) => self
                .variants
                .iter()
                .find(|(name, _)| name == s)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| {
                    let known: Vec<&str> =
                        self.variants.iter().map(|(name, _)| name.as_str()).collect();
                    JsonError::value(
                        path,
                        format!("unknown variant \"{s}\", expected one of [{}]", known.join(", ")),
                    )
                }),
            other => Err(wrong_kind(NodeKind::String, other, path)),
        }
    }

    fn to_node(&self, value: &T) -> JsonNode {
        let name = self
            .variants
            .iter()
            .find(|(_, v)| v == value)
            .map(|(name, _)| name.clone())
            .expect("value missing from JEnum variant table");
        JsonNode::Str(name)
    }
}
