//! Token scanner
//! Byte-wise scan of a single token from a cursor position

use super::delimiters::{Delimiter, DelimiterSet};

/// Scan the next token of `input` starting at byte offset `cursor`.
///
/// Leading spaces and tabs are skipped. A comma at the start of a token is a
/// token on its own, as long as comma is an active delimiter. Any other token
/// runs up to (not including) the next active delimiter, which is consumed,
/// or to the end of the input.
///
/// Returns the token together with the advanced cursor, or `None` once only
/// spaces and tabs remain. The token may be empty when two delimiters are
/// adjacent; the cursor always moves forward by at least one byte.
///
/// A cursor that is past the end or inside a multi-byte character yields
/// `None`. Cursors returned by this function always sit on a char boundary.
pub fn next_token<'a>(
    input: &'a str,
    cursor: usize,
    delimiters: DelimiterSet,
) -> Option<(&'a str, usize)> {
    if !input.is_char_boundary(cursor) {
        return None;
    }
    let bytes = input.as_bytes();
    let start = cursor
        + bytes
            .get(cursor..)?
            .iter()
            .position(|&b| b != b' ' && b != b'\t')?;

    if bytes[start] == b',' && delimiters.contains(Delimiter::Comma) {
        return Some((&input[start..start + 1], start + 1));
    }

    // Delimiters are ASCII, so every split lands on a char boundary
    match bytes[start..]
        .iter()
        .position(|&b| delimiters.contains_byte(b))
    {
        Some(offset) => {
            let end = start + offset;
            Some((&input[start..end], end + 1))
        }
        None => Some((&input[start..], input.len())),
    }
}

/// Iterator over the raw tokens of one parse session.
///
/// Yields every token [`next_token`] produces, empty ones included.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    cursor: usize,
    delimiters: DelimiterSet,
}

impl<'a> Tokens<'a> {
    pub fn new(
        input: &'a str,
        delimiters: DelimiterSet,
    ) -> Self {
        Self {
            input,
            cursor: 0,
            delimiters,
        }
    }

    /// Current cursor (byte offset)
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn delimiters(&self) -> DelimiterSet {
        self.delimiters
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.input.len() {
            return None;
        }
        match next_token(self.input, self.cursor, self.delimiters) {
            Some((token, cursor)) => {
                self.cursor = cursor;
                Some(token)
            }
            None => {
                self.cursor = self.input.len();
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Iterate the raw tokens of `input`
pub fn tokens(
    input: &str,
    delimiters: DelimiterSet,
) -> Tokens<'_> {
    Tokens::new(input, delimiters)
}
