//! Error types for YAMLPath parsing and navigation.

use crate::document::NodeKind;
use std::fmt;

/// The category a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed path text.
    PathSyntax,
    /// A well-formed segment that cannot be applied to the current node.
    UnsupportedSegment,
    /// A map lacks the requested key.
    MissingKey,
    /// An index or slice end exceeds the array length.
    OutOfBounds,
    /// A slice whose start exceeds its end.
    InvalidSlice,
    /// A value search over a non-string element, or with no match.
    ValueSearch,
    /// An attempt to traverse past a scalar.
    UnsupportedNode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::PathSyntax => "path syntax error",
            ErrorKind::UnsupportedSegment => "unsupported segment",
            ErrorKind::MissingKey => "missing key",
            ErrorKind::OutOfBounds => "out of bounds",
            ErrorKind::InvalidSlice => "invalid slice",
            ErrorKind::ValueSearch => "value search failed",
            ErrorKind::UnsupportedNode => "unsupported node",
        })
    }
}

/// A failure raised while tokenizing, classifying, or navigating a single
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("could not find terminating '{terminator}' in path '{remainder}'")]
    Unterminated { terminator: char, remainder: String },

    #[error("path ends with an escape character that escapes nothing")]
    DanglingEscape,

    #[error("unrecognized bracket clause '{segment}'")]
    UnrecognizedBracket { segment: String },

    #[error("key '{segment}' contains characters that must be quoted or escaped")]
    InvalidKey { segment: String },

    #[error("segment '{segment}' is not supported for {node}")]
    UnsupportedSegment { segment: String, node: NodeKind },

    #[error("could not find key '{key}'")]
    MissingKey { key: String },

    #[error("out of bounds index '{index}' for array of length '{len}'")]
    OutOfBounds { index: usize, len: usize },

    #[error("end slice index out of bounds '{end}' for array of length '{len}'")]
    SliceOutOfBounds { end: usize, len: usize },

    #[error("cannot take slice with reversed indexes [{start}:{end}]")]
    InvalidSlice { start: usize, end: usize },

    #[error("could not search for value '{segment}': element {index} is not a string")]
    NonStringElement { segment: String, index: usize },

    #[error("could not find match for search part '{segment}'")]
    NoValueMatch { segment: String },

    #[error("cannot navigate past scalar {scalar} with segment '{segment}'")]
    UnsupportedNode { scalar: String, segment: String },
}

impl NavigationError {
    /// Returns the category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NavigationError::Unterminated { .. }
            | NavigationError::DanglingEscape
            | NavigationError::UnrecognizedBracket { .. }
            | NavigationError::InvalidKey { .. } => ErrorKind::PathSyntax,
            NavigationError::UnsupportedSegment { .. } => ErrorKind::UnsupportedSegment,
            NavigationError::MissingKey { .. } => ErrorKind::MissingKey,
            NavigationError::OutOfBounds { .. } | NavigationError::SliceOutOfBounds { .. } => {
                ErrorKind::OutOfBounds
            }
            NavigationError::InvalidSlice { .. } => ErrorKind::InvalidSlice,
            NavigationError::NonStringElement { .. } | NavigationError::NoValueMatch { .. } => {
                ErrorKind::ValueSearch
            }
            NavigationError::UnsupportedNode { .. } => ErrorKind::UnsupportedNode,
        }
    }
}

/// A failure resolving a path, carrying the complete original path string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("yamlpath '{path}': {source}")]
pub struct PathError {
    path: String,
    #[source]
    source: NavigationError,
}

impl PathError {
    pub fn new(path: impl Into<String>, source: NavigationError) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The path string exactly as the caller supplied it.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// The underlying segment-level failure.
    pub fn cause(&self) -> &NavigationError {
        &self.source
    }
}
