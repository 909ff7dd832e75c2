//! Delimiter set
//! A bitmask over the five separator characters, adjusted per parse by an
//! ignore specification

use std::fmt;
use std::str::FromStr;

/// Delimiter specification error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterError {
    #[error("Unknown delimiter: '{ch}'")]
    Unknown { ch: char },
}

/// A single separator character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Semicolon,
    Comma,
    Equals,
    Space,
    Tab,
}

impl Delimiter {
    /// All delimiters, in canonical order
    pub const ALL: [Delimiter; 5] = [
        Delimiter::Semicolon,
        Delimiter::Comma,
        Delimiter::Equals,
        Delimiter::Space,
        Delimiter::Tab,
    ];

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Semicolon => b';',
            Delimiter::Comma => b',',
            Delimiter::Equals => b'=',
            Delimiter::Space => b' ',
            Delimiter::Tab => b'\t',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ';' => Some(Delimiter::Semicolon),
            ',' => Some(Delimiter::Comma),
            '=' => Some(Delimiter::Equals),
            ' ' => Some(Delimiter::Space),
            '\t' => Some(Delimiter::Tab),
            _ => None,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        // Non-ASCII bytes never map to a delimiter
        if byte.is_ascii() {
            Self::from_char(byte as char)
        } else {
            None
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of active delimiters for one parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelimiterSet {
    bits: u8,
}

impl DelimiterSet {
    /// `;`, `,`, `=`, space and tab
    pub const DEFAULT: DelimiterSet = DelimiterSet { bits: 0b1_1111 };

    pub const EMPTY: DelimiterSet = DelimiterSet { bits: 0 };

    /// The default set minus every delimiter named in `ignore`.
    ///
    /// Characters that are not delimiters are skipped. An empty `ignore`
    /// yields [`DelimiterSet::DEFAULT`]; ignoring all five yields an empty
    /// set, in which case every token runs to the end of the input.
    pub fn ignoring(ignore: &str) -> Self {
        ignore
            .chars()
            .filter_map(Delimiter::from_char)
            .fold(Self::DEFAULT, |set, d| set.without(d))
    }

    pub fn contains(
        &self,
        delimiter: Delimiter,
    ) -> bool {
        self.bits & delimiter.bit() != 0
    }

    pub fn contains_byte(
        &self,
        byte: u8,
    ) -> bool {
        Delimiter::from_byte(byte).is_some_and(|d| self.contains(d))
    }

    pub fn with(
        self,
        delimiter: Delimiter,
    ) -> Self {
        Self {
            bits: self.bits | delimiter.bit(),
        }
    }

    pub fn without(
        self,
        delimiter: Delimiter,
    ) -> Self {
        Self {
            bits: self.bits & !delimiter.bit(),
        }
    }

    pub fn insert(
        &mut self,
        delimiter: Delimiter,
    ) {
        *self = self.with(delimiter);
    }

    pub fn remove(
        &mut self,
        delimiter: Delimiter,
    ) {
        *self = self.without(delimiter);
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate members in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Delimiter> {
        let set = *self;
        Delimiter::ALL.into_iter().filter(move |d| set.contains(*d))
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromIterator<Delimiter> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = Delimiter>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, DelimiterSet::with)
    }
}

impl fmt::Display for DelimiterSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for d in self.iter() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Strict parse: each character must name a delimiter. Duplicates are allowed.
impl FromStr for DelimiterSet {
    type Err = DelimiterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| Delimiter::from_char(ch).ok_or(DelimiterError::Unknown { ch }))
            .collect()
    }
}
