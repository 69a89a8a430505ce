//! `JsonError` and the `JsonOutcome` result alias.
//!
//! Every fallible operation in this crate returns `JsonOutcome<T>`; there is
//! no recovery by default and no panicking path outside of tests. The
//! standard `Result` combinators cover composition: `map` to transform,
//! `and_then` to chain, `or_else` to recover, and
//! `collect::<Result<Vec<_>, _>>()` to reduce a sequence of outcomes to the
//! first failure or all successes.
//!
//! Lex and parse errors carry a byte offset into the input text, because no
//! tree exists yet. Decode errors carry the full [`NodePath`] from the
//! document root to the offending node.

use thiserror::Error;

use crate::node::NodeKind;
use crate::path::NodePath;

/// Outcome of any fallible jsonbind operation.
pub type JsonOutcome<T> = Result<T, JsonError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum JsonError {
    /// Malformed token: bad escape, bad number grammar, unterminated string.
    #[error("lexing error at position {position}: {reason}")]
    Lex { position: usize, reason: String },

    /// Unexpected token, missing close bracket, trailing content, depth
    /// limit exceeded.
    #[error("parsing error at position {position}: {reason}")]
    Parse { position: usize, reason: String },

    /// A converter expected one node kind and found another.
    #[error("error at <{path}>: expected a {expected} node but found {found}")]
    WrongNodeKind {
        path: NodePath,
        expected: NodeKind,
        found: NodeKind,
    },

    /// A mandatory object field was absent.
    #[error("error at <{path}>: missing mandatory field")]
    MissingField { path: NodePath },

    /// The node kind was right but the value failed the domain parse.
    #[error("error at <{path}>: {reason}")]
    Value { path: NodePath, reason: String },
}

impl JsonError {
    pub fn lex(position: usize, reason: impl Into<String>) -> Self {
        JsonError::Lex {
            position,
            reason: reason.into(),
        }
    }

    pub fn parse(position: usize, reason: impl Into<String>) -> Self {
        JsonError::Parse {
            position,
            reason: reason.into(),
        }
    }

    pub fn value(path: &NodePath, reason: impl Into<String>) -> Self {
        JsonError::Value {
            path: path.clone(),
            reason: reason.into(),
        }
    }

    /// The path to the failing node, when one exists. Lex and parse errors
    /// predate the tree and have none.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            JsonError::Lex { .. } | JsonError::Parse { .. } => None,
            JsonError::WrongNodeKind { path, .. }
            | JsonError::MissingField { path }
            | JsonError::Value { path, .. } => Some(path),
        }
    }
}
