//! yamlnav - YAMLPath navigation over parsed YAML documents.
//!
//! A path such as `hash.child_attr.key` or `/users[1]/name` is tokenized,
//! classified, and walked segment by segment against a [`document::Node`]
//! tree supplied by the caller.

pub mod config;
pub mod document;
pub mod yamlpath;

pub use config::Options;
pub use document::Node;
pub use yamlpath::{resolve, Navigator, PathError};
