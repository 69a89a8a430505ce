//! JSON codec and typed converter combinators.
//!
//! Text goes through the [`lexer`] into a token sequence, the [`parser`]
//! builds an immutable [`JsonNode`] tree from it, and a [`JsonConverter`]
//! binds that tree to a typed domain value in both directions — no runtime
//! reflection, no exceptions. Every decode failure carries a [`NodePath`]
//! naming the exact node that failed, e.g. `$.users[2].email`.
//!
//! ```
//! use jsonbind_core::{JInt, JVec, JsonConverter};
//!
//! let ints = JVec::new(JInt);
//! assert_eq!(ints.from_json("[1, 2, 3]").unwrap(), vec![1, 2, 3]);
//! assert_eq!(ints.to_json(&vec![1, 2, 3]), "[1,2,3]");
//!
//! let err = ints.from_json(r#"[1, "two"]"#).unwrap_err();
//! assert_eq!(err.path().unwrap().to_string(), "$[1]");
//! ```
//!
//! The library is a pure, synchronous transformation over in-memory text:
//! no I/O, no shared mutable state. Converters are frozen once constructed
//! and safe to share across threads.

mod convert;
mod error;
mod node;
mod path;
mod render;

pub mod lexer;
pub mod parser;

pub use convert::{
    FieldRef, JBool, JDate, JDateTime, JEnum, JEpochSeconds, JFloat, JInt, JMap, JNullable,
    JNumber, JNumberLike, JObject, JSealed, JString, JStringLike, JUInt, JVec, JXMap,
    JsonConverter, ObjReader, ObjectBuilder, OptFieldRef,
};
pub use error::{JsonError, JsonOutcome};
pub use node::{JsonNode, JsonNumber, JsonObject, NodeKind};
pub use parser::{parse, parse_text, parse_text_with, parse_with, ParseOptions};
pub use path::{NodePath, PathSegment};
pub use render::{render, render_pretty};
