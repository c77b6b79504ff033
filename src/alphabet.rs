//! The fixed alphabet which keys in a [`crate::trie::Trie`] are built from.
//!
//! A [`Symbol`] can only be constructed from a character which belongs to
//! the alphabet, so every index stored in the trie is known to be in range.
//! [`parse`] is the single place where raw text is turned into symbols and
//! it reports the first offending character and its position.
//!
//! ```
//! use autocomplete::alphabet::{self, Symbol};
//!
//! let word = alphabet::parse("APP").unwrap();
//! assert_eq!(word, vec![Symbol::from_char('A').unwrap(), Symbol::from_char('P').unwrap(), Symbol::from_char('P').unwrap()]);
//! assert!(alphabet::parse("app").is_err());
//! assert_eq!(alphabet::normalize("  apple \t"), "APPLE");
//! ```

use std::fmt;

use crate::errors::{AutocompleteError, Result};

/// Number of distinct symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

const FIRST: u8 = b'A';

/// A single member of the alphabet (an uppercase ASCII letter).
///
/// Symbols order by their index, which matches ASCII order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Build a symbol from its index in the alphabet.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Build a symbol from a character. Returns None for characters outside
    /// of the alphabet. No case folding is performed.
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Self(ch as u8 - FIRST))
        } else {
            None
        }
    }

    /// The position of this symbol in the alphabet.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The character this symbol stands for.
    #[inline(always)]
    pub fn as_char(self) -> char {
        (FIRST + self.0) as char
    }

    /// Every symbol, in ascending index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Symbol> + ExactSizeIterator {
        (0..ALPHABET_SIZE as u8).map(Symbol)
    }
}

impl TryFrom<char> for Symbol {
    type Error = AutocompleteError;

    fn try_from(ch: char) -> Result<Self> {
        Symbol::from_char(ch).ok_or(AutocompleteError::InvalidSymbol {
            symbol: ch,
            position: 0,
        })
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.as_char()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Convert text into symbols. Fails on the first character which is not in
/// the alphabet, reporting it along with its (char based) position.
pub fn parse(text: &str) -> Result<Vec<Symbol>> {
    text.chars()
        .enumerate()
        .map(|(position, symbol)| {
            Symbol::from_char(symbol).ok_or(AutocompleteError::InvalidSymbol { symbol, position })
        })
        .collect()
}

/// Trim surrounding whitespace and uppercase. This is what callers apply to
/// dictionary lines and typed input before handing them to [`parse`].
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Render a sequence of symbols back into a String.
pub fn render<'a, I: IntoIterator<Item = &'a Symbol>>(symbols: I) -> String {
    symbols.into_iter().map(|s| s.as_char()).collect()
}
