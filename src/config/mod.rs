//! Navigation options for yamlnav.
//!
//! This module provides the options structure consulted by the
//! [`Navigator`](crate::yamlpath::Navigator), with defaults matching the
//! canonical resolution behaviour and support for serialization via serde.
//! Options can be loaded from a TOML fragment embedded in a host
//! application's own configuration.
//!
//! # Example
//!
//! ```
//! use yamlnav::config::{MissingKeySearch, Options};
//!
//! // Use default options
//! let options = Options::default();
//! assert_eq!(options.missing_key_search, MissingKeySearch::Error);
//!
//! // Load from TOML
//! let custom = Options::from_toml_str("missing_key_search = \"null\"").unwrap();
//! assert_eq!(custom.missing_key_search, MissingKeySearch::Null);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// What a key search (`[.=key]`) yields when the key is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeySearch {
    /// Fail with a missing key error, like a plain key lookup.
    #[default]
    Error,
    /// Resolve to a null scalar.
    Null,
}

/// Options controlling how paths are resolved.
///
/// # Fields
///
/// * `missing_key_search` - Result of a key search for an absent key (default: error)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Result of a key search for an absent key
    #[serde(default)]
    pub missing_key_search: MissingKeySearch,
}

impl Options {
    /// Parses options from a TOML document.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("Failed to parse yamlnav options")
    }

    /// Serializes options to pretty TOML.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize yamlnav options")
    }
}
