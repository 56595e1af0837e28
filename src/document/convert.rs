//! Conversion from decoded YAML values into document nodes.
//!
//! The navigator never parses YAML text itself. Callers decode with
//! `serde_yaml` and hand the resulting value over; this module folds it into
//! the three-shape [`Node`] tree.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::Node;
//!
//! let value: serde_yaml::Value = serde_yaml::from_str("answer: 42").unwrap();
//! let doc = Node::from(value);
//! assert_eq!(doc.get("answer"), Some(&Node::integer(42)));
//! ```

use super::node::{Node, Number, Scalar};
use indexmap::IndexMap;
use serde_yaml::Value as YamlValue;

impl From<YamlValue> for Node {
    fn from(value: YamlValue) -> Self {
        convert_yaml_value(&value)
    }
}

impl From<&YamlValue> for Node {
    fn from(value: &YamlValue) -> Self {
        convert_yaml_value(value)
    }
}

fn convert_yaml_value(value: &YamlValue) -> Node {
    match value {
        YamlValue::Mapping(mapping) => {
            let entries: IndexMap<String, Node> = mapping
                .iter()
                .map(|(k, v)| (key_to_string(k), convert_yaml_value(v)))
                .collect();
            Node::Map(entries)
        }
        YamlValue::Sequence(items) => Node::Array(items.iter().map(convert_yaml_value).collect()),
        YamlValue::String(s) => Node::Scalar(Scalar::String(s.clone())),
        YamlValue::Number(n) => Node::Scalar(Scalar::Number(convert_number(n))),
        YamlValue::Bool(b) => Node::Scalar(Scalar::Boolean(*b)),
        YamlValue::Null => Node::Scalar(Scalar::Null),
        // Tags carry no meaning for navigation
        YamlValue::Tagged(tagged) => convert_yaml_value(&tagged.value),
    }
}

fn convert_number(n: &serde_yaml::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::from(i),
        None => Number::from(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Renders a mapping key as the string the path addresses it by.
///
/// YAML allows any value as a key; scalars use their plain text form and
/// complex keys fall back to their flow serialization.
fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => serde_yaml::to_string(key)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
