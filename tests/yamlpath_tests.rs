//! End-to-end resolution against a decoded YAML document.

use serde_json::json;
use yamlnav::document::Node;
use yamlnav::yamlpath::{resolve, ErrorKind};

const YAML_DOC: &str = r#"---
hash:
  child_attr:
    key: 5280
  dotted.child:
    key: 42
aliases:
  - &first_anchor Simple string value
  - Complex ending
users:
  - name: User One
    password: foobar
    roles:
      - Writers
  - name: User Two
    password: barfoo
    roles:
      - Power Users
      - Editors
"#;

fn load(yaml: &str) -> Node {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).expect("fixture should decode");
    Node::from(value)
}

/// Resolves `path` and renders the result as JSON for comparison.
fn resolve_json(doc: &Node, path: &str) -> serde_json::Value {
    let found = resolve(doc, path).unwrap_or_else(|e| panic!("{}", e));
    serde_json::to_value(found.as_ref()).expect("node should serialize")
}

fn error_kind(doc: &Node, path: &str) -> ErrorKind {
    match resolve(doc, path) {
        Ok(found) => panic!("expected error for '{}', got {:?}", path, found),
        Err(err) => err.kind(),
    }
}

#[test]
fn test_dot_notation() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "hash.child_attr.key"), json!(5280));
}

#[test]
fn test_slash_notation() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "/hash/child_attr/key"), json!(5280));
}

#[test]
fn test_escaped_dot_notation() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "hash.dotted\\.child.key"), json!(42));
}

#[test]
fn test_quoted_dot_notation() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "hash.\"dotted.child\".key"), json!(42));
    assert_eq!(resolve_json(&doc, "hash.'dotted.child'.key"), json!(42));
}

#[test]
fn test_slash_dotted() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "/hash/dotted.child/key"), json!(42));
}

#[test]
fn test_search_child_key() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "hash.child_attr[.=key]"), json!(5280));
    assert_eq!(resolve_json(&doc, "/hash/child_attr[.=key]"), json!(5280));
}

#[test]
fn test_explicit_and_implicit_index() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "aliases[0]"), json!("Simple string value"));
    assert_eq!(resolve_json(&doc, "aliases.0"), json!("Simple string value"));
    assert_eq!(resolve_json(&doc, "/aliases[0]"), json!("Simple string value"));
    assert_eq!(resolve_json(&doc, "/aliases/0"), json!("Simple string value"));
}

#[test]
fn test_array_slice() {
    let doc = load(YAML_DOC);
    assert_eq!(
        resolve_json(&doc, "aliases[0:2]"),
        json!(["Simple string value", "Complex ending"])
    );
}

#[test]
fn test_value_search() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "aliases[.^Simple]"), json!("Simple string value"));
    assert_eq!(resolve_json(&doc, "aliases[.%string]"), json!("Simple string value"));
    assert_eq!(resolve_json(&doc, "aliases[.$value]"), json!("Simple string value"));
    assert_eq!(resolve_json(&doc, "aliases[.$ending]"), json!("Complex ending"));
}

#[test]
fn test_array_of_hashes() {
    let doc = load(YAML_DOC);
    assert_eq!(resolve_json(&doc, "/users/name"), json!(["User One", "User Two"]));
    assert_eq!(resolve_json(&doc, "/users[1]/name"), json!("User Two"));
    assert_eq!(
        resolve_json(&doc, "users.roles"),
        json!([["Writers"], ["Power Users", "Editors"]])
    );
    assert_eq!(resolve_json(&doc, "users.roles.0"), json!(["Writers"]));
}

#[test]
fn test_resolve_whole_subtree() {
    let doc = load(YAML_DOC);
    assert_eq!(
        resolve_json(&doc, "hash.child_attr"),
        json!({ "key": 5280 })
    );
}

#[test]
fn test_error_on_non_existing_key() {
    let doc = load(YAML_DOC);
    assert_eq!(error_kind(&doc, "/broken"), ErrorKind::MissingKey);
}

#[test]
fn test_error_on_non_existing_array_index() {
    let doc = load(YAML_DOC);
    assert_eq!(error_kind(&doc, "aliases[4]"), ErrorKind::OutOfBounds);
}

#[test]
fn test_oversized_index_is_out_of_bounds() {
    let doc = load(YAML_DOC);
    for path in [
        "aliases[99999999999999999999999]",
        "aliases.99999999999999999999999",
        "aliases[0:99999999999999999999999]",
    ] {
        assert_eq!(error_kind(&doc, path), ErrorKind::OutOfBounds, "path {}", path);
    }
}

#[test]
fn test_error_taxonomy() {
    let doc = load(YAML_DOC);
    assert_eq!(error_kind(&doc, "aliases[0"), ErrorKind::PathSyntax);
    assert_eq!(error_kind(&doc, "hash.'child_attr"), ErrorKind::PathSyntax);
    assert_eq!(error_kind(&doc, "hash[.=]"), ErrorKind::PathSyntax);
    assert_eq!(error_kind(&doc, "hash[0:1]"), ErrorKind::UnsupportedSegment);
    assert_eq!(error_kind(&doc, "aliases[1:0]"), ErrorKind::InvalidSlice);
    assert_eq!(error_kind(&doc, "aliases[0:3]"), ErrorKind::OutOfBounds);
    assert_eq!(error_kind(&doc, "users[.^User]"), ErrorKind::ValueSearch);
    assert_eq!(error_kind(&doc, "aliases[.^Nothing]"), ErrorKind::ValueSearch);
    assert_eq!(error_kind(&doc, "hash.child_attr.key.deeper"), ErrorKind::UnsupportedNode);
}

#[test]
fn test_error_message_names_path() {
    let doc = load(YAML_DOC);
    let err = resolve(&doc, "/users/1/name/first").unwrap_err();
    assert_eq!(err.path(), "/users/1/name/first");
    assert_eq!(
        err.to_string(),
        "yamlpath '/users/1/name/first': cannot navigate past scalar \"User Two\" with segment 'first'"
    );
}

#[test]
fn test_non_ascii_keys() {
    let doc = load("données:\n  clé.é: 1\n  日本:\n    - 語\n    - 言葉\n");
    assert_eq!(resolve_json(&doc, "données.'clé.é'"), json!(1));
    assert_eq!(resolve_json(&doc, "données.clé\\.é"), json!(1));
    assert_eq!(resolve_json(&doc, "/données/clé.é"), json!(1));
    assert_eq!(resolve_json(&doc, "/données/日本[1]"), json!("言葉"));
    assert_eq!(resolve_json(&doc, "données.日本[.^言]"), json!("言葉"));
}

#[test]
fn test_quoted_key_with_spaces() {
    let doc = load("\"a key\": {\"x:y\": ok}\n");
    assert_eq!(resolve_json(&doc, "'a key'.\"x:y\""), json!("ok"));
    assert_eq!(error_kind(&doc, "a key"), ErrorKind::PathSyntax);
}

#[test]
fn test_anchor_and_alias_resolve_to_same_value() {
    let doc = load("base: &anchor\n  port: 80\ncopy: *anchor\n");
    assert_eq!(resolve_json(&doc, "copy.port"), json!(80));
    assert_eq!(resolve_json(&doc, "base.port"), resolve_json(&doc, "copy.port"));
}
