//! YAMLPath tokenizer, classifier and navigator.
//!
//! This module resolves compact path expressions against an already parsed
//! document, returning the addressed sub-value.
//!
//! # Supported Syntax
//!
//! - `a.b.c` - Dot-delimited keys
//! - `/a/b/c` - Slash-delimited keys (a leading `/` selects this form)
//! - `a\.b`, `'a.b'`, `"a.b"` - Escaped or quoted keys containing separators
//! - `[n]` or `.n` - Array index
//! - `[start:end]` - Half-open array slice
//! - `[.=key]` - Key search on a map
//! - `[.^pre]`, `[.$suf]`, `[.%sub]` - First string element by prefix, suffix or substring
//! - `users.name` - A key applied to an array is applied to every element
//!
//! # Examples
//!
//! ```
//! // hash.child_attr.key    - nested lookup
//! // /users[1]/name         - index then key
//! // aliases[0:2]           - first two aliases
//! // aliases[.^Simple]      - first alias starting with "Simple"
//! ```

pub mod error;
pub mod navigator;
pub mod segment;
pub mod tokenizer;

pub use error::{ErrorKind, NavigationError, PathError};
pub use navigator::Navigator;
pub use segment::{SearchOperator, Segment, YamlPath};
pub use tokenizer::{Token, Tokenizer};

use crate::document::Node;
use std::borrow::Cow;

/// Resolves `path` against `document` with default options.
///
/// # Example
///
/// ```
/// use yamlnav::document::Node;
/// use yamlnav::yamlpath::resolve;
///
/// let value: serde_yaml::Value =
///     serde_yaml::from_str("hash:\n  child_attr:\n    key: 5280\n").unwrap();
/// let doc = Node::from(value);
///
/// let found = resolve(&doc, "hash.child_attr.key").unwrap();
/// assert_eq!(found.as_ref(), &Node::integer(5280));
/// ```
pub fn resolve<'a>(document: &'a Node, path: &str) -> Result<Cow<'a, Node>, PathError> {
    Navigator::default().resolve(document, path)
}
