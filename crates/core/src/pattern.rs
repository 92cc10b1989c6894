//! Pattern data model: the symbol alphabet and the validated pattern type.
//!
//! A [`Pattern`] can only be built through validation (see
//! [`crate::validation::validate_pattern`] or [`str::parse`]), so any value
//! of the type is guaranteed non-empty and drawn from the `{S, T}` alphabet.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::validation;

/// A single pattern symbol.
///
/// The alphabet is closed: two symbols, each with a fixed display word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Soft,
    Tough,
}

impl Symbol {
    /// Maps a raw pattern character to its symbol. Case-sensitive: only the
    /// uppercase `S` and `T` are recognized.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Soft),
            'T' => Some(Self::Tough),
            _ => None,
        }
    }

    /// The display word for this symbol.
    pub fn word(self) -> &'static str {
        match self {
            Self::Soft => "Soft",
            Self::Tough => "Tough",
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Soft => 'S',
            Self::Tough => 'T',
        }
    }
}

/// A validated, immutable sequence of pattern symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::len_without_is_empty)] // a validated pattern is never empty
pub struct Pattern(Vec<Symbol>);

impl Pattern {
    pub(crate) fn new(symbols: Vec<Symbol>) -> Self {
        debug_assert!(!symbols.is_empty());
        Self(symbols)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Symbol at `index mod len`: indexing past the end wraps around, so the
    /// pattern repeats cyclically without bound.
    pub fn symbol_at(&self, index: usize) -> Symbol {
        self.0[index % self.0.len()]
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validation::validate_pattern(s)
    }
}
