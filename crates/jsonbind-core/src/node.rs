//! `JsonNode` — the immutable in-memory JSON tree.
//!
//! Six node kinds: null, boolean, number, string, array, object. Numbers
//! keep the exact decimal text of the literal ([`JsonNumber`]); the core
//! never coerces them to a binary float, so `1.0` renders back as `1.0`.
//! Objects keep fields in insertion order ([`JsonObject`]), with
//! last-write-wins on duplicate keys.

use std::fmt;

/// The kind of a [`JsonNode`], used in kind-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            NodeKind::Null => "Null",
            NodeKind::Boolean => "Boolean",
            NodeKind::Number => "Number",
            NodeKind::String => "String",
            NodeKind::Array => "Array",
            NodeKind::Object => "Object",
        };
        f.write_str(desc)
    }
}

/// A JSON number as its exact decimal text.
///
/// The raw text is guaranteed to match the JSON numeric grammar. Equality is
/// textual: `1.0` and `1.00` are different `JsonNumber`s even though they
/// denote the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonNumber {
    raw: String,
}

impl JsonNumber {
    /// Wraps already-validated numeric text. The lexer is the main caller;
    /// `from_raw` re-checks the grammar for values built by hand.
    pub fn from_raw(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if is_valid_number(&raw) {
            Some(Self { raw })
        } else {
            None
        }
    }

    pub(crate) fn from_lexed(raw: String) -> Self {
        debug_assert!(is_valid_number(&raw));
        Self { raw }
    }

    pub fn from_i64(value: i64) -> Self {
        Self {
            raw: value.to_string(),
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Self {
            raw: value.to_string(),
        }
    }

    /// Panics in debug builds on NaN or infinity; JSON has no representation
    /// for them. Converters that must handle non-finite floats fall back to
    /// string nodes (see `JFloat`).
    pub fn from_f64(value: f64) -> Self {
        debug_assert!(value.is_finite());
        let raw = format!("{value}");
        // `{}` on f64 never produces a bare trailing dot or leading `.`,
        // so the text is valid JSON as-is.
        Self { raw }
    }

    /// The exact decimal text, preserved through parse and render.
    pub fn as_raw(&self) -> &str {
        &self.raw
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.raw.parse().ok()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.raw.parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.raw.parse().ok()
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Validates the RFC 8259 numeric grammar: optional minus, integer part with
/// no leading zero (except `0` itself), optional fraction, optional exponent.
pub(crate) fn is_valid_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }
    // Integer part
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        _ => return false,
    }
    // Fraction
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    // Exponent
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    i == bytes.len()
}

/// Insertion-ordered field map of an object node.
///
/// Lookup is linear; JSON objects are small enough that this beats hashing
/// in practice, and it keeps deterministic re-encoding trivial.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonObject {
    fields: Vec<(String, JsonNode)>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field. On a duplicate key the value is replaced in place:
    /// last write wins, first occurrence keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: JsonNode) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonNode)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, JsonNode)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonNode)>>(iter: I) -> Self {
        let mut obj = JsonObject::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

/// An immutable JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonNode {
    Null,
    Bool(bool),
    Num(JsonNumber),
    Str(String),
    Array(Vec<JsonNode>),
    Object(JsonObject),
}

impl JsonNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            JsonNode::Null => NodeKind::Null,
            JsonNode::Bool(_) => NodeKind::Boolean,
            JsonNode::Num(_) => NodeKind::Number,
            JsonNode::Str(_) => NodeKind::String,
            JsonNode::Array(_) => NodeKind::Array,
            JsonNode::Object(_) => NodeKind::Object,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_insert_is_last_write_wins() {
        let mut obj = JsonObject::new();
        obj.insert("a", JsonNode::Bool(true));
        obj.insert("b", JsonNode::Null);
        obj.insert("a", JsonNode::Bool(false));
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&JsonNode::Bool(false)));
        assert!(obj.contains_key("b"));
        assert!(!obj.contains_key("c"));
        // First occurrence keeps its position.
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_number_grammar() {
        for ok in ["0", "-0", "42", "-1.5", "1.0", "2e10", "2E+3", "0.1e-2"] {
            assert!(is_valid_number(ok), "{ok} should be valid");
        }
        for bad in ["01", ".5", "1.", "+1", "1e", "1e+", "--1", "", "-", "0x1"] {
            assert!(!is_valid_number(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_number_accessors() {
        let n = JsonNumber::from_raw("42").unwrap();
        assert_eq!(n.as_i64(), Some(42));
        assert_eq!(n.as_u64(), Some(42));
        assert_eq!(n.as_f64(), Some(42.0));
        let f = JsonNumber::from_raw("1.5").unwrap();
        assert_eq!(f.as_i64(), None);
        assert_eq!(f.as_f64(), Some(1.5));
    }
}
