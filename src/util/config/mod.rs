//! Tokenizer configuration
//!
//! Lets a configuration layer describe how a list-valued option is split,
//! stored as RON.
//!
//! ```text
//! (
//!     ignore: "=",
//!     dedup: true,
//! )
//! ```
//!
//! # Usage
//!
//! ```rust
//! use strlist::util::config::TokenizerConfig;
//!
//! let config = TokenizerConfig::from_ron(r#"(ignore: "=")"#).unwrap();
//! assert_eq!(config.parse("a;b=c"), vec!["a", "b=c"]);
//! ```

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tokenizer::{parse_list_ignoring, DelimiterError, DelimiterSet};

/// How a list-valued option is tokenized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TokenizerConfig {
    /// Delimiters to treat as content, e.g. `"="` for `key=value` items
    #[serde(default)]
    pub ignore: String,
    /// Drop repeated tokens, keeping the first occurrence
    #[serde(default)]
    pub dedup: bool,
}

impl TokenizerConfig {
    /// Parse and validate a RON document
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Serialize as pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Every character of `ignore` must name a delimiter
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ignore.parse::<DelimiterSet>()?;
        Ok(())
    }

    /// Active delimiter set
    pub fn delimiters(&self) -> DelimiterSet {
        DelimiterSet::ignoring(&self.ignore)
    }

    /// Tokenize `input` according to this configuration
    pub fn parse(
        &self,
        input: &str,
    ) -> Vec<String> {
        let tokens = parse_list_ignoring(input, &self.ignore);
        if self.dedup {
            let unique: IndexSet<String> = tokens.into_iter().collect();
            tracing::trace!(count = unique.len(), "deduplicated tokens");
            unique.into_iter().collect()
        } else {
            tokens
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ParseError(#[from] ron::error::SpannedError),
    #[error("Config serialize error: {0}")]
    SerializeError(#[from] ron::Error),
    #[error("Invalid ignore specification: {0}")]
    InvalidIgnore(#[from] DelimiterError),
}
