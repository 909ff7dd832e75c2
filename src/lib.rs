//! strlist
//!
//! Splits configuration-style values (host lists, flag lists, `key=value`
//! options) into trimmed, non-empty tokens.
//!
//! # Example
//!
//! ```
//! use strlist::{parse_list, parse_set};
//!
//! assert_eq!(parse_list("mon1;mon2 mon3"), vec!["mon1", "mon2", "mon3"]);
//! assert!(parse_set("x,x,y").contains("y"));
//! ```

#![warn(rust_2018_idioms)]

pub mod tokenizer;

// Utility modules
pub mod util;

// Re-exports
pub use tokenizer::{
    next_token, parse_list, parse_list_ignoring, parse_list_into, parse_set, parse_set_into,
    tokens, Delimiter, DelimiterError, DelimiterSet, Tokens,
};
pub use util::config::{ConfigError, TokenizerConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
