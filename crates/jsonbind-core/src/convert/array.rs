//! Array binding: an element converter applied across an Array node.

use super::{wrong_kind, JsonConverter};
use crate::error::JsonOutcome;
use crate::node::{JsonNode, NodeKind};
use crate::path::NodePath;

/// Array node to `Vec<C::T>` through an element converter.
///
/// Strict by default: the first failing element aborts the decode, with the
/// element's index appended to the error path. [`JVec::lenient`] instead
/// drops elements that fail to decode and never itself fails — built for
/// feeds with partially-invalid historical data, where an empty surviving
/// list is still a success. Encoding is identical in both modes.
pub struct JVec<C> {
    elem: C,
    lenient: bool,
}

impl<C> JVec<C> {
    pub fn new(elem: C) -> Self {
        Self {
            elem,
            lenient: false,
        }
    }

    pub fn lenient(elem: C) -> Self {
        Self {
            elem,
            lenient: true,
        }
    }
}

impl<C: JsonConverter> JsonConverter for JVec<C> {
    type T = Vec<C::T>;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<Vec<C::T>> {
        let values = match node {
            JsonNode::Array(values) => values,
            other => return Err(wrong_kind(NodeKind::Array, other, path)),
        };
        let mut out = Vec::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            match self.elem.from_node(value, &path.index(i)) {
                Ok(v) => out.push(v),
                Err(_) if self.lenient => {}
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }

    fn to_node(&self, value: &Vec<C::T>) -> JsonNode {
        JsonNode::Array(value.iter().map(|v| self.elem.to_node(v)).collect())
    }
}
