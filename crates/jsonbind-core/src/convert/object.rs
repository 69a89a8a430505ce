//! Object binding: a declared set of named field bindings over an Object
//! node.
//!
//! Each registration on [`ObjectBuilder`] pairs a field name, a child
//! converter and an extractor closure, and returns a typed handle
//! ([`FieldRef`] / [`OptFieldRef`]). The decode closure reads the handles
//! out of an [`ObjReader`] with `?`, so a field failure exits the enclosing
//! decode with a typed error and never escapes further — the early-exit
//! stays inside the one decode call that introduced it.
//!
//! ```
//! use jsonbind_core::{JInt, JObject, JString, JsonConverter};
//!
//! #[derive(Debug, PartialEq, Clone)]
//! struct User {
//!     id: i64,
//!     name: String,
//!     nickname: Option<String>,
//! }
//!
//! let j_user = JObject::new(|b| {
//!     let id = b.field("id", JInt, |u: &User| u.id);
//!     let name = b.field("name", JString, |u: &User| u.name.clone());
//!     let nickname = b.optional("nickname", JString, |u: &User| u.nickname.clone());
//!     move |r| {
//!         Ok(User {
//!             id: id.get(r)?,
//!             name: name.get(r)?,
//!             nickname: nickname.get(r)?,
//!         })
//!     }
//! });
//!
//! let user = j_user.from_json(r#"{"id": 7, "name": "ada"}"#).unwrap();
//! assert_eq!(user.nickname, None);
//! assert_eq!(j_user.to_json(&user), r#"{"id":7,"name":"ada"}"#);
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{wrong_kind, JsonConverter};
use crate::error::{JsonError, JsonOutcome};
use crate::node::{JsonNode, JsonObject, NodeKind};
use crate::path::NodePath;

/// Read access to an Object node's field map during one decode call.
pub struct ObjReader<'a> {
    fields: &'a JsonObject,
    path: &'a NodePath,
}

impl<'a> ObjReader<'a> {
    /// The path of the object being decoded.
    pub fn path(&self) -> &NodePath {
        self.path
    }

    /// The raw node of a field, when present.
    pub fn node(&self, name: &str) -> Option<&'a JsonNode> {
        self.fields.get(name)
    }
}

/// Handle for a mandatory field registered on an [`ObjectBuilder`].
pub struct FieldRef<C> {
    name: String,
    converter: Arc<C>,
}

impl<C: JsonConverter> FieldRef<C> {
    /// Looks the field up and decodes it at the field-extended path. Absent
    /// field: [`JsonError::MissingField`].
    pub fn get(&self, reader: &ObjReader<'_>) -> JsonOutcome<C::T> {
        let field_path = reader.path.field(self.name.clone());
        match reader.fields.get(&self.name) {
            Some(node) => self.converter.from_node(node, &field_path),
            None => Err(JsonError::MissingField { path: field_path }),
        }
    }
}

/// Handle for an optional field: absent decodes to `None`, never an error.
/// Absence is distinct from a present `null` — a `null` value reaches the
/// child converter, which only tolerates it when wrapped in [`JNullable`].
pub struct OptFieldRef<C> {
    name: String,
    converter: Arc<C>,
}

impl<C: JsonConverter> OptFieldRef<C> {
    pub fn get(&self, reader: &ObjReader<'_>) -> JsonOutcome<Option<C::T>> {
        match reader.fields.get(&self.name) {
            Some(node) => {
                let field_path = reader.path.field(self.name.clone());
                self.converter.from_node(node, &field_path).map(Some)
            }
            None => Ok(None),
        }
    }
}

struct FieldSpec<T: 'static> {
    name: String,
    // None means the field is omitted from the encoded object.
    encode: Box<dyn Fn(&T) -> Option<JsonNode> + Send + Sync>,
}

/// Collects the field bindings of a [`JObject`] in declaration order.
pub struct ObjectBuilder<T: 'static> {
    fields: Vec<FieldSpec<T>>,
}

impl<T: 'static> ObjectBuilder<T> {
    /// Registers a mandatory field and returns its typed handle.
    pub fn field<C, G>(&mut self, name: &str, converter: C, extract: G) -> FieldRef<C>
    where
        C: JsonConverter + Send + Sync + 'static,
        G: Fn(&T) -> C::T + Send + Sync + 'static,
    {
        let converter = Arc::new(converter);
        let encoder = converter.clone();
        self.fields.push(FieldSpec {
            name: name.to_string(),
            encode: Box::new(move |value| Some(encoder.to_node(&extract(value)))),
        });
        FieldRef {
            name: name.to_string(),
            converter,
        }
    }

    /// Registers an optional field. An extractor returning `None` omits the
    /// field from the encoded object entirely (no explicit `null`).
    pub fn optional<C, G>(&mut self, name: &str, converter: C, extract: G) -> OptFieldRef<C>
    where
        C: JsonConverter + Send + Sync + 'static,
        G: Fn(&T) -> Option<C::T> + Send + Sync + 'static,
    {
        let converter = Arc::new(converter);
        let encoder = converter.clone();
        self.fields.push(FieldSpec {
            name: name.to_string(),
            encode: Box::new(move |value| extract(value).map(|v| encoder.to_node(&v))),
        });
        OptFieldRef {
            name: name.to_string(),
            converter,
        }
    }
}

/// Composite converter over an Object node with a fixed set of named field
/// bindings. See the module docs for the construction pattern.
pub struct JObject<T: 'static> {
    fields: Vec<FieldSpec<T>>,
    decode: Box<dyn Fn(&ObjReader<'_>) -> JsonOutcome<T> + Send + Sync>,
}

impl<T: 'static> JObject<T> {
    /// `setup` registers the fields and returns the decode closure, which is
    /// called with an [`ObjReader`] for every decoded object.
    pub fn new<S, D>(setup: S) -> Self
    where
        S: FnOnce(&mut ObjectBuilder<T>) -> D,
        D: Fn(&ObjReader<'_>) -> JsonOutcome<T> + Send + Sync + 'static,
    {
        let mut builder = ObjectBuilder { fields: Vec::new() };
        let decode = setup(&mut builder);
        Self {
            fields: builder.fields,
            decode: Box::new(decode),
        }
    }
}

impl<T: 'static> JsonConverter for JObject<T> {
    type T = T;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<T> {
        match node {
            JsonNode::Object(fields) => (self.decode)(&ObjReader { fields, path }),
            other => Err(wrong_kind(NodeKind::Object, other, path)),
        }
    }

    fn to_node(&self, value: &T) -> JsonNode {
        let mut obj = JsonObject::new();
        for spec in &self.fields {
            if let Some(node) = (spec.encode)(value) {
                obj.insert(spec.name.clone(), node);
            }
        }
        JsonNode::Object(obj)
    }
}

/// Null tolerance as an explicit wrapper: `Null` decodes to `None` and
/// `None` encodes to `Null`. Without this wrapper a converter fails on
/// `null` with a kind error, which keeps "absent" and "null" distinct when
/// combined with [`ObjectBuilder::optional`].
pub struct JNullable<C> {
    inner: C,
}

impl<C> JNullable<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: JsonConverter> JsonConverter for JNullable<C> {
    type T = Option<C::T>;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<Option<C::T>> {
        match node {
            JsonNode::Null => Ok(None),
            other => self.inner.from_node(other, path).map(Some),
        }
    }

    fn to_node(&self, value: &Option<C::T>) -> JsonNode {
        match value {
            Some(inner) => self.inner.to_node(inner),
            None => JsonNode::Null,
        }
    }
}

/// Object node with arbitrary string keys to a `BTreeMap`.
///
/// Decode visits entries in document order, each value at its own
/// field-extended path; encode emits keys sorted.
pub struct JMap<C> {
    values: C,
}

impl<C> JMap<C> {
    pub fn new(values: C) -> Self {
        Self { values }
    }
}

impl<C: JsonConverter> JsonConverter for JMap<C> {
    type T = BTreeMap<String, C::T>;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<Self::T> {
        match node {
            JsonNode::Object(fields) => fields
                .iter()
                .map(|(key, value)| {
                    let entry_path = path.field(key);
                    self.values
                        .from_node(value, &entry_path)
                        .map(|v| (key.to_string(), v))
                })
                .collect(),
            other => Err(wrong_kind(NodeKind::Object, other, path)),
        }
    }

    fn to_node(&self, value: &Self::T) -> JsonNode {
        let mut obj = JsonObject::new();
        for (key, v) in value {
            obj.insert(key.clone(), self.values.to_node(v));
        }
        JsonNode::Object(obj)
    }
}
