//! JSON tree rendering: minified and pretty text output.
//!
//! Numbers emit their preserved decimal text verbatim, so `1.0` never
//! degrades to `1`. Object fields render in insertion order.

use crate::node::JsonNode;

/// Renders a tree as minified JSON (no inter-token whitespace).
pub fn render(node: &JsonNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Renders a tree with newlines and `indent` spaces per nesting level.
pub fn render_pretty(node: &JsonNode, indent: usize) -> String {
    let mut out = String::new();
    write_node_pretty(&mut out, node, indent, 0);
    out
}

fn write_node(out: &mut String, node: &JsonNode) {
    match node {
        JsonNode::Null => out.push_str("null"),
        JsonNode::Bool(true) => out.push_str("true"),
        JsonNode::Bool(false) => out.push_str("false"),
        JsonNode::Num(num) => out.push_str(num.as_raw()),
        JsonNode::Str(s) => write_str(out, s),
        JsonNode::Array(values) => {
            out.push('[');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_node(out, value);
            }
            out.push(']');
        }
        JsonNode::Object(fields) => {
            out.push('{');
            for (i, (key, value)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_str(out, key);
                out.push(':');
                write_node(out, value);
            }
            out.push('}');
        }
    }
}

fn write_node_pretty(out: &mut String, node: &JsonNode, indent: usize, level: usize) {
    match node {
        JsonNode::Array(values) if !values.is_empty() => {
            out.push('[');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, indent, level + 1);
                write_node_pretty(out, value, indent, level + 1);
            }
            out.push('\n');
            push_indent(out, indent, level);
            out.push(']');
        }
        JsonNode::Object(fields) if !fields.is_empty() => {
            out.push('{');
            for (i, (key, value)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, indent, level + 1);
                write_str(out, key);
                out.push_str(": ");
                write_node_pretty(out, value, indent, level + 1);
            }
            out.push('\n');
            push_indent(out, indent, level);
            out.push('}');
        }
        _ => write_node(out, node),
    }
}

fn push_indent(out: &mut String, indent: usize, level: usize) {
    for _ in 0..indent * level {
        out.push(' ');
    }
}

/// Writes a string as a quoted JSON literal, escaping `"`, `\`, the
/// short-form control characters and `\u00XX` for the rest below 0x20.
fn write_str(out: &mut String, s: &str) {
    use std::fmt::Write;

    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if c < '\u{20}' => {
                write!(out, "\\u{:04x}", c as u32).expect("writing to String cannot fail");
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{JsonNumber, JsonObject};

    #[test]
    fn test_escape_roundtrip_forms() {
        let mut out = String::new();
        write_str(&mut out, "a\"b\\c\nd\u{0001}");
        assert_eq!(out, "\"a\\\"b\\\\c\\nd\\u0001\"");
    }

    #[test]
    fn test_minified_has_no_whitespace() {
        let mut obj = JsonObject::new();
        obj.insert("a", JsonNode::Num(JsonNumber::from_i64(1)));
        obj.insert("b", JsonNode::Array(vec![JsonNode::Null, JsonNode::Bool(true)]));
        assert_eq!(render(&JsonNode::Object(obj)), r#"{"a":1,"b":[null,true]}"#);
    }

    #[test]
    fn test_pretty_indents_per_level() {
        let mut obj = JsonObject::new();
        obj.insert("a", JsonNode::Array(vec![JsonNode::Num(JsonNumber::from_i64(1))]));
        let text = render_pretty(&JsonNode::Object(obj), 2);
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_empty_containers_stay_compact_in_pretty_mode() {
        assert_eq!(render_pretty(&JsonNode::Array(vec![]), 2), "[]");
        assert_eq!(render_pretty(&JsonNode::Object(JsonObject::new()), 2), "{}");
    }
}
