//! Classified YAMLPath segments.

use super::error::NavigationError;
use super::tokenizer::{Token, Tokenizer};
use crate::document::NodeKind;
use std::fmt;
use std::str::FromStr;

/// Comparison applied by a value search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOperator {
    /// `^`
    Prefix,
    /// `$`
    Suffix,
    /// `%`
    Contains,
}

impl SearchOperator {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '^' => Some(SearchOperator::Prefix),
            '$' => Some(SearchOperator::Suffix),
            '%' => Some(SearchOperator::Contains),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            SearchOperator::Prefix => '^',
            SearchOperator::Suffix => '$',
            SearchOperator::Contains => '%',
        }
    }

    /// Tests `candidate` against `pattern`.
    pub fn matches(self, candidate: &str, pattern: &str) -> bool {
        match self {
            SearchOperator::Prefix => candidate.starts_with(pattern),
            SearchOperator::Suffix => candidate.ends_with(pattern),
            SearchOperator::Contains => candidate.contains(pattern),
        }
    }
}

/// A segment in a YAMLPath expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unquoted key (`name`). Purely numeric keys index arrays.
    PlainKey(String),
    /// Quoted or escaped key (`'dotted.child'`, `dotted\.child`)
    QuotedKey(String),
    /// Key search (`[.=name]`)
    KeySearch(String),
    /// Array index (`[0]`, or a numeric plain key applied to an array)
    Index(usize),
    /// Half-open array slice (`[start:end]`)
    Slice(usize, usize),
    /// First string element matching a pattern (`[.^pre]`, `[.$suf]`, `[.%sub]`)
    ValueSearch(SearchOperator, String),
}

impl Segment {
    /// Classifies a raw token.
    ///
    /// Bracket grammar is checked here; whether a numeric plain key is an
    /// index is left to [`Segment::for_node`].
    pub fn classify(token: &Token) -> Result<Segment, NavigationError> {
        match token {
            Token::Key {
                text,
                verbatim: true,
            } => Ok(Segment::QuotedKey(text.clone())),
            Token::Key {
                text,
                verbatim: false,
            } => {
                if is_key(text) {
                    Ok(Segment::PlainKey(text.clone()))
                } else {
                    Err(NavigationError::InvalidKey {
                        segment: text.clone(),
                    })
                }
            }
            Token::Bracket(clause) => classify_bracket(clause),
        }
    }

    /// Reinterprets this segment for a node of the given kind.
    ///
    /// A purely numeric plain key addresses an array element when applied to
    /// an array and a map entry otherwise.
    pub fn for_node(&self, kind: NodeKind) -> Segment {
        match (self, kind) {
            (Segment::PlainKey(text), NodeKind::Array) if is_digits(text) => {
                Segment::Index(parse_index(text))
            }
            _ => self.clone(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::PlainKey(key) => f.write_str(key),
            Segment::QuotedKey(key) => write!(f, "{:?}", key),
            Segment::KeySearch(key) => write!(f, "[.={}]", key),
            Segment::Index(i) => write!(f, "[{}]", i),
            Segment::Slice(start, end) => write!(f, "[{}:{}]", start, end),
            Segment::ValueSearch(op, pattern) => write!(f, "[.{}{}]", op.as_char(), pattern),
        }
    }
}

/// Letters, digits, `.`, `_` and `-`.
fn is_key(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '_' || c == '-')
}

/// A letter followed by letters, digits, `_` or `-`.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Parses a digit run already checked by [`is_digits`]. Runs too long for
/// `usize` saturate, so they fail the bounds check against any real array.
fn parse_index(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

fn classify_bracket(clause: &str) -> Result<Segment, NavigationError> {
    let unrecognized = || NavigationError::UnrecognizedBracket {
        segment: clause.to_string(),
    };
    let inner = clause
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(unrecognized)?;

    if let Some(key) = inner.strip_prefix(".=") {
        if is_identifier(key) {
            return Ok(Segment::KeySearch(key.to_string()));
        }
    }

    if is_digits(inner) {
        return Ok(Segment::Index(parse_index(inner)));
    }

    if let Some((start, end)) = inner.split_once(':') {
        if is_digits(start) && is_digits(end) {
            return Ok(Segment::Slice(parse_index(start), parse_index(end)));
        }
    }

    if let Some(search) = inner.strip_prefix('.') {
        let mut chars = search.chars();
        if let Some(op) = chars.next().and_then(SearchOperator::from_char) {
            let pattern = chars.as_str();
            if !pattern.is_empty() {
                return Ok(Segment::ValueSearch(op, pattern.to_string()));
            }
        }
    }

    Err(unrecognized())
}

/// A parsed YAMLPath expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlPath {
    source: String,
    segments: Vec<Segment>,
}

impl YamlPath {
    /// Parses and classifies a path string.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnav::yamlpath::{Segment, YamlPath};
    ///
    /// let path = YamlPath::parse("/hash/child_attr[.=key]").unwrap();
    /// assert_eq!(
    ///     path.segments(),
    ///     &[
    ///         Segment::PlainKey("hash".to_string()),
    ///         Segment::PlainKey("child_attr".to_string()),
    ///         Segment::KeySearch("key".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn parse(path: &str) -> Result<YamlPath, NavigationError> {
        let segments = Tokenizer::tokenize(path)?
            .iter()
            .map(Segment::classify)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(YamlPath {
            source: path.to_string(),
            segments,
        })
    }

    /// The path string this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for YamlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for YamlPath {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YamlPath::parse(s)
    }
}
