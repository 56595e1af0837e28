//! Document model navigated by YAMLPath expressions.
//!
//! Documents arrive already decoded. [`convert`] turns a decoder's value tree
//! into the closed [`node::Node`] representation used by the navigator.

pub mod convert;
pub mod node;

pub use node::{Node, NodeKind, Number, Scalar};
