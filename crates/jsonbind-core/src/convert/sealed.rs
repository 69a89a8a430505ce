//! Polymorphic object binding: one converter per subtype, dispatched on a
//! string discriminator field.
//!
//! Each variant registers a subtype name, a sub-converter producing the
//! variant's payload, and a wrap/unwrap closure pair moving between the
//! payload and the sealed type. Decode reads the discriminator field, picks
//! the matching variant and hands it the whole object node; encode asks each
//! variant in turn to claim the value, then prepends the discriminator to
//! the encoded object.
//!
//! ```
//! use jsonbind_core::{JFloat, JObject, JSealed, JsonConverter};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Square { side: f64 },
//! }
//!
//! let j_circle = JObject::new(|b| {
//!     let radius = b.field("radius", JFloat, |r: &f64| *r);
//!     move |r| radius.get(r)
//! });
//! let j_square = JObject::new(|b| {
//!     let side = b.field("side", JFloat, |s: &f64| *s);
//!     move |r| side.get(r)
//! });
//!
//! let j_shape = JSealed::new("kind")
//!     .variant(
//!         "circle",
//!         j_circle,
//!         |radius| Shape::Circle { radius },
//!         |s: &Shape| match s {
//!             Shape::Circle { radius } => Some(*radius),
//!             _ => None,
//!         },
//!     )
//!     .variant(
//!         "square",
//!         j_square,
//!         |side| Shape::Square { side },
//!         |s: &Shape| match s {
//!             Shape::Square { side } => Some(*side),
//!             _ => None,
//!         },
//!     );
//!
//! let shape = j_shape.from_json(r#"{"kind": "circle", "radius": 2.5}"#).unwrap();
//! assert_eq!(shape, Shape::Circle { radius: 2.5 });
//! assert_eq!(j_shape.to_json(&shape), r#"{"kind":"circle","radius":2.5}"#);
//! ```

use std::sync::Arc;

use super::{wrong_kind, JsonConverter};
use crate::error::{JsonError, JsonOutcome};
use crate::node::{JsonNode, JsonObject, NodeKind};
use crate::path::NodePath;

struct Variant<T: 'static> {
    name: String,
    decode: Box<dyn Fn(&JsonNode, &NodePath) -> JsonOutcome<T> + Send + Sync>,
    // None means the value belongs to a different variant.
    encode: Box<dyn Fn(&T) -> Option<JsonNode> + Send + Sync>,
}

/// Converter over a closed family of object shapes sharing a discriminator
/// field. See the module docs for the construction pattern.
pub struct JSealed<T: 'static> {
    discriminator: String,
    variants: Vec<Variant<T>>,
}

impl<T: 'static> JSealed<T> {
    pub fn new(discriminator: impl Into<String>) -> Self {
        Self {
            discriminator: discriminator.into(),
            variants: Vec::new(),
        }
    }

    /// Registers one subtype. `wrap` lifts the sub-converter's payload into
    /// the sealed type; `unwrap` claims a value on encode, returning `None`
    /// when the value belongs to another variant. The sub-converter must
    /// produce an Object node, since the discriminator is spliced into it.
    pub fn variant<C, W, U>(mut self, name: &str, converter: C, wrap: W, unwrap: U) -> Self
    where
        C: JsonConverter + Send + Sync + 'static,
        W: Fn(C::T) -> T + Send + Sync + 'static,
        U: Fn(&T) -> Option<C::T> + Send + Sync + 'static,
    {
        let converter = Arc::new(converter);
        let decoder = converter.clone();
        self.variants.push(Variant {
            name: name.to_string(),
            decode: Box::new(move |node, path| decoder.from_node(node, path).map(&wrap)),
            encode: Box::new(move |value| unwrap(value).map(|v| converter.to_node(&v))),
        });
        self
    }

    fn lookup(&self, name: &str) -> Option<&Variant<T>> {
        self.variants.iter().find(|v| v.name == name)
    }
}

impl<T: 'static> JsonConverter for JSealed<T> {
    type T = T;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<T> {
        let fields = match node {
            JsonNode::Object(fields) => fields,
            other => return Err(wrong_kind(NodeKind::Object, other, path)),
        };
        let disc_path = path.field(self.discriminator.clone());
        let name = match fields.get(&self.discriminator) {
            None => return Err(JsonError::MissingField { path: disc_path }),
            Some(JsonNode::Str(name)) => name,
            Some(other) => return Err(wrong_kind(NodeKind::String, other, &disc_path)),
        };
        let variant = self.lookup(name).ok_or_else(|| {
            let known: Vec<&str> = self.variants.iter().map(|v| v.name.as_str()).collect();
            JsonError::value(
                &disc_path,
                format!("unknown subtype \"{name}\", expected one of [{}]", known.join(", ")),
            )
        })?;
        // The variant converter sees the whole object, discriminator included.
        (variant.decode)(node, path)
    }

    fn to_node(&self, value: &T) -> JsonNode {
        let (name, encoded) = self
            .variants
            .iter()
            .find_map(|v| (v.encode)(value).map(|node| (&v.name, node)))
            .expect("value missing from JSealed variant table");
        let body = match encoded {
            JsonNode::Object(fields) => fields,
            _ => panic!("JSealed variant converter must produce an Object node"),
        };
        let mut obj = JsonObject::new();
        obj.insert(self.discriminator.clone(), JsonNode::Str(name.clone()));
        for (key, node) in body.iter() {
            obj.insert(key, node.clone());
        }
        JsonNode::Object(obj)
    }
}
