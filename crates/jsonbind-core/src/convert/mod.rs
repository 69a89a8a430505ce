//! Converter combinators: bidirectional bindings between domain types and
//! the JSON tree.
//!
//! A [`JsonConverter`] pairs `from_node` (tree to domain value, may fail
//! with a path-qualified [`JsonError`]) with `to_node` (domain value to
//! tree, total). Leaf converters bridge one scalar node kind and one domain
//! scalar; composite converters ([`JObject`], [`JVec`], [`JNullable`],
//! [`JMap`]) compose child converters and extend the [`NodePath`] with the
//! relevant field name or index before delegating, so every failure in a
//! deep structure names the exact node that caused it.
//!
//! Converters are frozen once constructed; a converter built from
//! `Send + Sync` closures can be shared freely across threads.

mod array;
mod object;
mod scalar;
mod sealed;
mod time;

pub use array::JVec;
pub use object::{FieldRef, JMap, JNullable, JObject, ObjReader, ObjectBuilder, OptFieldRef};
pub use scalar::{JBool, JEnum, JFloat, JInt, JNumber, JNumberLike, JString, JStringLike, JUInt};
pub use sealed::JSealed;
pub use time::{JDate, JDateTime, JEpochSeconds};

use crate::error::{JsonError, JsonOutcome};
use crate::node::{JsonNode, NodeKind};
use crate::parser::{parse_text_with, ParseOptions};
use crate::path::NodePath;
use crate::render::{render, render_pretty};

/// A bidirectional binding between a domain type `T` and a JSON subtree.
pub trait JsonConverter {
    type T;

    /// Decodes a node at the given path. Failures carry the full path from
    /// the document root to the offending node.
    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<Self::T>;

    /// Encodes a value as a tree. Total: a valid domain value always
    /// produces a well-formed node.
    fn to_node(&self, value: &Self::T) -> JsonNode;

    /// Parses JSON text and decodes it from the root.
    fn from_json(&self, text: &str) -> JsonOutcome<Self::T> {
        self.from_json_with(text, &ParseOptions::default())
    }

    fn from_json_with(&self, text: &str, options: &ParseOptions) -> JsonOutcome<Self::T> {
        let node = parse_text_with(text, options)?;
        self.from_node(&node, &NodePath::root())
    }

    /// Encodes a value as minified JSON text.
    fn to_json(&self, value: &Self::T) -> String {
        render(&self.to_node(value))
    }

    /// Encodes a value as pretty-printed JSON text with the given indent
    /// width.
    fn to_json_pretty(&self, value: &Self::T, indent: usize) -> String {
        render_pretty(&self.to_node(value), indent)
    }

    /// Wraps this converter with a pair of adapting functions, turning a
    /// converter for `Self::T` into one for `U`. A `from` failure becomes a
    /// [`JsonError::Value`] at the current path.
    ///
    /// This is also how an array-like domain type binds directly to a JSON
    /// array: `JVec::new(elem).xmap(construct, deconstruct)`.
    fn xmap<U, F, G>(self, from: F, to: G) -> JXMap<Self, U>
    where
        Self: Sized,
        Self::T: 'static,
        U: 'static,
        F: Fn(Self::T) -> Result<U, String> + Send + Sync + 'static,
        G: Fn(&U) -> Self::T + Send + Sync + 'static,
    {
        JXMap {
            inner: self,
            from: Box::new(from),
            to: Box::new(to),
        }
    }
}

/// Converter produced by [`JsonConverter::xmap`].
pub struct JXMap<C, U: 'static>
where
    C: JsonConverter,
    C::T: 'static,
{
    inner: C,
    from: Box<dyn Fn(C::T) -> Result<U, String> + Send + Sync>,
    to: Box<dyn Fn(&U) -> C::T + Send + Sync>,
}

impl<C, U: 'static> JsonConverter for JXMap<C, U>
where
    C: JsonConverter,
    C::T: 'static,
{
    type T = U;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<U> {
        let value = self.inner.from_node(node, path)?;
        (self.from)(value).map_err(|reason| JsonError::value(path, reason))
    }

    fn to_node(&self, value: &U) -> JsonNode {
        self.inner.to_node(&(self.to)(value))
    }
}

pub(crate) fn wrong_kind(expected: NodeKind, node: &JsonNode, path: &NodePath) -> JsonError {
    JsonError::WrongNodeKind {
        path: path.clone(),
        expected,
        found: node.kind(),
    }
}
