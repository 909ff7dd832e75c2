//! Tokenizer module
//! Splits configuration-style lists on `;`, `,`, `=`, space and tab
//!
//! Tokens are trimmed of leading spaces and tabs and empty tokens are
//! dropped. A comma that does not directly terminate a token is kept as a
//! `","` token of its own.
//!
//! ```
//! use strlist::tokenizer::{parse_list, parse_list_ignoring, parse_set};
//!
//! assert_eq!(parse_list("foo=bar; baz"), vec!["foo", "bar", "baz"]);
//! assert_eq!(parse_list_ignoring("a;b=c", "="), vec!["a", "b=c"]);
//! assert_eq!(parse_set("x,x,y").len(), 2);
//! ```

pub mod delimiters;
pub mod scanner;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

pub use delimiters::{Delimiter, DelimiterError, DelimiterSet};
pub use scanner::{next_token, tokens, Tokens};

/// Split `input` with the full default delimiter set
pub fn parse_list(input: &str) -> Vec<String> {
    parse_list_ignoring(input, "")
}

/// Split `input`, treating every delimiter named in `ignore` as content
pub fn parse_list_ignoring(
    input: &str,
    ignore: &str,
) -> Vec<String> {
    let mut out = Vec::new();
    parse_list_into(input, ignore, &mut out);
    out
}

/// Clear `out` and fill it with the non-empty tokens of `input`, in order
pub fn parse_list_into(
    input: &str,
    ignore: &str,
    out: &mut Vec<String>,
) {
    out.clear();
    let delimiters = DelimiterSet::ignoring(ignore);
    tracing::debug!(
        len = input.len(),
        delimiters = ?delimiters.to_string(),
        "tokenizing list"
    );
    out.extend(non_empty(input, delimiters).map(str::to_owned));
    tracing::debug!(count = out.len(), "list tokenized");
}

/// Split `input` with the full default delimiter set, collapsing duplicates
pub fn parse_set(input: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    parse_set_into(input, &mut out);
    out
}

/// Clear `out` and fill it with the distinct non-empty tokens of `input`
pub fn parse_set_into(
    input: &str,
    out: &mut BTreeSet<String>,
) {
    out.clear();
    tracing::debug!(len = input.len(), "tokenizing set");
    out.extend(non_empty(input, DelimiterSet::DEFAULT).map(str::to_owned));
    tracing::debug!(count = out.len(), "set tokenized");
}

fn non_empty(
    input: &str,
    delimiters: DelimiterSet,
) -> impl Iterator<Item = &str> {
    tokens(input, delimiters)
        .inspect(|token| tracing::trace!(token, "token"))
        .filter(|token| !token.is_empty())
}
