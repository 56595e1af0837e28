//! Document node representation.
//!
//! This module provides the data structures a YAMLPath is resolved against.
//! A document is a tree of `Node`s: maps keyed by string, ordered arrays, and
//! scalars. The tree is produced by an external decoder (see
//! [`convert`](super::convert)) and is only ever read during navigation.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::node::{Node, Number, Scalar};
//!
//! let doc: Node = [
//!     ("name".to_string(), Node::string("yamlnav")),
//!     ("version".to_string(), Node::integer(1)),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert!(doc.is_map());
//! assert_eq!(doc.get("name").and_then(Node::as_str), Some("yamlnav"));
//! assert_eq!(doc.get("version"), Some(&Node::Scalar(Scalar::Number(Number::Integer(1)))));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Represents document numbers (integer or float)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Integer(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

/// A leaf value: string, number, boolean, or null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Number(Number),
    Boolean(bool),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{:?}", s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// The runtime shape of a node.
///
/// Segment classification and error reporting only ever need to know which
/// of the three shapes a node has, never its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Map,
    Array,
    Scalar,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Map => "map",
            NodeKind::Array => "array",
            NodeKind::Scalar => "scalar",
        })
    }
}

/// A document node.
///
/// Maps keep their keys in source order so that resolved values serialize
/// the way they were written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A mapping from unique string keys to nodes
    Map(IndexMap<String, Node>),
    /// An ordered sequence of nodes
    Array(Vec<Node>),
    /// A string, number, boolean, or null
    Scalar(Scalar),
}

impl Node {
    pub fn string(s: impl Into<String>) -> Self {
        Node::Scalar(Scalar::String(s.into()))
    }

    pub fn integer(i: i64) -> Self {
        Node::Scalar(Scalar::Number(Number::Integer(i)))
    }

    pub fn float(f: f64) -> Self {
        Node::Scalar(Scalar::Number(Number::Float(f)))
    }

    pub fn boolean(b: bool) -> Self {
        Node::Scalar(Scalar::Boolean(b))
    }

    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Returns the shape of this node.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnav::document::node::{Node, NodeKind};
    ///
    /// assert_eq!(Node::Array(vec![]).kind(), NodeKind::Array);
    /// assert_eq!(Node::null().kind(), NodeKind::Scalar);
    /// ```
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Map(_) => NodeKind::Map,
            Node::Array(_) => NodeKind::Array,
            Node::Scalar(_) => NodeKind::Scalar,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string content if this node is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` if this node is a map.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|entries| entries.get(key))
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Node::Map(iter.into_iter().collect())
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind() {
        let map: Node = vec![("a".to_string(), Node::null())].into_iter().collect();
        let array: Node = vec![Node::integer(1)].into_iter().collect();

        assert_eq!(map.kind(), NodeKind::Map);
        assert_eq!(array.kind(), NodeKind::Array);
        assert_eq!(Node::string("x").kind(), NodeKind::Scalar);
        assert_eq!(format!("{}", NodeKind::Array), "array");
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(format!("{}", Scalar::String("hi".to_string())), "\"hi\"");
        assert_eq!(format!("{}", Scalar::Number(Number::Integer(42))), "42");
        assert_eq!(format!("{}", Scalar::Number(Number::Float(42.5))), "42.5");
        assert_eq!(format!("{}", Scalar::Boolean(false)), "false");
        assert_eq!(format!("{}", Scalar::Null), "null");
    }

    #[test]
    fn test_get_on_non_map() {
        assert_eq!(Node::Array(vec![]).get("a"), None);
        assert_eq!(Node::string("a").get("a"), None);
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let map: Node = vec![
            ("zeta".to_string(), Node::integer(1)),
            ("alpha".to_string(), Node::integer(2)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = map
            .as_map()
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_number_conversions() {
        assert_eq!(Number::from(42_i64), Number::Integer(42));
        assert_eq!(Number::from(1.5), Number::Float(1.5));
        assert_eq!(Number::Integer(42).to_string(), "42");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
    }
}
