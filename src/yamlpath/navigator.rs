use super::error::{NavigationError, PathError};
use super::segment::{SearchOperator, Segment, YamlPath};
use crate::config::{MissingKeySearch, Options};
use crate::document::{Node, NodeKind};
use indexmap::IndexMap;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Walks a document one segment at a time.
///
/// Results borrow from the document where a segment addresses an existing
/// node, and are owned where a segment collects several nodes into a new
/// array (slices and broadcasts).
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    options: Options,
}

impl Navigator {
    pub fn new(options: Options) -> Self {
        Navigator { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parses `path` and resolves it against `document`.
    pub fn resolve<'a>(&self, document: &'a Node, path: &str) -> Result<Cow<'a, Node>, PathError> {
        let parsed = YamlPath::parse(path).map_err(|err| fail(path, err))?;
        self.navigate(document, &parsed)
    }

    /// Resolves an already parsed path against `document`.
    pub fn navigate<'a>(
        &self,
        document: &'a Node,
        path: &YamlPath,
    ) -> Result<Cow<'a, Node>, PathError> {
        let mut current = Cow::Borrowed(document);

        for segment in path.segments() {
            current = match current {
                Cow::Borrowed(node) => self.step(node, segment),
                Cow::Owned(node) => self
                    .step(&node, segment)
                    .map(|next| Cow::Owned(next.into_owned())),
            }
            .map_err(|err| fail(path.source(), err))?;
        }

        Ok(current)
    }

    fn step<'n>(&self, node: &'n Node, segment: &Segment) -> Result<Cow<'n, Node>, NavigationError> {
        trace!(segment = %segment, node = %node.kind(), "navigating segment");
        match node {
            Node::Map(entries) => self.navigate_map(entries, segment),
            Node::Array(items) => self.navigate_array(items, segment),
            Node::Scalar(scalar) => Err(NavigationError::UnsupportedNode {
                scalar: scalar.to_string(),
                segment: segment.to_string(),
            }),
        }
    }

    fn navigate_map<'n>(
        &self,
        entries: &'n IndexMap<String, Node>,
        segment: &Segment,
    ) -> Result<Cow<'n, Node>, NavigationError> {
        match segment {
            Segment::PlainKey(key) | Segment::QuotedKey(key) => entries
                .get(key)
                .map(Cow::Borrowed)
                .ok_or_else(|| missing_key(key)),
            Segment::KeySearch(key) => match (entries.get(key), self.options.missing_key_search) {
                (Some(child), _) => Ok(Cow::Borrowed(child)),
                (None, MissingKeySearch::Null) => Ok(Cow::Owned(Node::null())),
                (None, MissingKeySearch::Error) => Err(missing_key(key)),
            },
            _ => Err(unsupported(segment, NodeKind::Map)),
        }
    }

    fn navigate_array<'n>(
        &self,
        items: &'n [Node],
        segment: &Segment,
    ) -> Result<Cow<'n, Node>, NavigationError> {
        let segment = segment.for_node(NodeKind::Array);

        match &segment {
            Segment::Index(index) => items
                .get(*index)
                .map(Cow::Borrowed)
                .ok_or(NavigationError::OutOfBounds {
                    index: *index,
                    len: items.len(),
                }),
            Segment::Slice(start, end) => {
                if start > end {
                    return Err(NavigationError::InvalidSlice {
                        start: *start,
                        end: *end,
                    });
                }
                if *end > items.len() {
                    return Err(NavigationError::SliceOutOfBounds {
                        end: *end,
                        len: items.len(),
                    });
                }
                Ok(Cow::Owned(Node::Array(items[*start..*end].to_vec())))
            }
            Segment::PlainKey(_) | Segment::QuotedKey(_) => {
                // Any failing element fails the whole broadcast
                let results = items
                    .iter()
                    .map(|item| self.step(item, &segment).map(Cow::into_owned))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Cow::Owned(Node::Array(results)))
            }
            Segment::ValueSearch(op, pattern) => search_values(items, *op, pattern, &segment),
            _ => Err(unsupported(&segment, NodeKind::Array)),
        }
    }
}

/// Returns the first string element matching `pattern`. Every element must
/// be a string.
fn search_values<'n>(
    items: &'n [Node],
    op: SearchOperator,
    pattern: &str,
    segment: &Segment,
) -> Result<Cow<'n, Node>, NavigationError> {
    let mut found = None;
    for (index, item) in items.iter().enumerate() {
        let value = item
            .as_str()
            .ok_or_else(|| NavigationError::NonStringElement {
                segment: segment.to_string(),
                index,
            })?;
        if found.is_none() && op.matches(value, pattern) {
            found = Some(item);
        }
    }
    found
        .map(Cow::Borrowed)
        .ok_or_else(|| NavigationError::NoValueMatch {
            segment: segment.to_string(),
        })
}

fn missing_key(key: &str) -> NavigationError {
    NavigationError::MissingKey {
        key: key.to_string(),
    }
}

fn unsupported(segment: &Segment, node: NodeKind) -> NavigationError {
    NavigationError::UnsupportedSegment {
        segment: segment.to_string(),
        node,
    }
}

fn fail(path: &str, err: NavigationError) -> PathError {
    debug!(path, error = %err, "path resolution failed");
    PathError::new(path, err)
}
