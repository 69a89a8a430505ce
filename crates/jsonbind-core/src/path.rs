//! `NodePath` — the location of a node relative to the document root.
//!
//! A path is either the root or a (parent, segment) pair, where a segment is
//! an object field name or an array index. Paths are built incrementally
//! while a converter descends the tree and are never mutated; the segment
//! chain is shared through `Arc`, so extending and cloning are O(1).
//!
//! Rendering is deferred until an error is reported:
//!
//! ```
//! use jsonbind_core::NodePath;
//!
//! let path = NodePath::root().field("users").index(2).field("email");
//! assert_eq!(path.to_string(), "$.users[2].email");
//! ```

use std::fmt;
use std::sync::Arc;

/// One step of a [`NodePath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object field name.
    Field(String),
    /// Array element index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct PathLink {
    parent: NodePath,
    segment: PathSegment,
}

/// Immutable chain of path segments locating a node in a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath {
    head: Option<Arc<PathLink>>,
}

impl NodePath {
    /// The empty path, rendered as `$`.
    pub fn root() -> Self {
        Self { head: None }
    }

    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// Extends the path with an object field segment.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Extends the path with an array index segment.
    pub fn index(&self, idx: usize) -> Self {
        self.push(PathSegment::Index(idx))
    }

    fn push(&self, segment: PathSegment) -> Self {
        Self {
            head: Some(Arc::new(PathLink {
                parent: self.clone(),
                segment,
            })),
        }
    }

    /// The path one segment shorter. Root's parent is root.
    pub fn parent(&self) -> Self {
        match &self.head {
            None => Self::root(),
            Some(link) => link.parent.clone(),
        }
    }

    /// The segments from the root down to this node.
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut out = Vec::new();
        let mut cur = self.head.as_deref();
        while let Some(link) = cur {
            out.push(link.segment.clone());
            cur = link.parent.head.as_deref();
        }
        out.reverse();
        out
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments() {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_dollar() {
        assert_eq!(NodePath::root().to_string(), "$");
        assert!(NodePath::root().is_root());
        assert!(!NodePath::root().field("a").is_root());
    }

    #[test]
    fn test_nested_path_rendering() {
        let path = NodePath::root().field("users").index(2).field("email");
        assert_eq!(path.to_string(), "$.users[2].email");
    }

    #[test]
    fn test_parent_does_not_change_child() {
        let parent = NodePath::root().field("a");
        let child = parent.index(0);
        assert_eq!(parent.to_string(), "$.a");
        assert_eq!(child.to_string(), "$.a[0]");
        assert_eq!(child.parent(), parent);
        assert_eq!(NodePath::root().parent(), NodePath::root());
    }

    #[test]
    fn test_equality_is_structural() {
        let a = NodePath::root().field("x").index(1);
        let b = NodePath::root().field("x").index(1);
        assert_eq!(a, b);
        assert_ne!(a, NodePath::root().field("x").index(2));
    }
}
