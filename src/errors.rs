//! Error types.

/// Result type with [`AutocompleteError`] as the default error.
pub type Result<T, E = AutocompleteError> = std::result::Result<T, E>;

/// Everything which can go wrong while building or querying a trie.
#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    /// A character which is not part of the alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Words must contain at least one symbol.
    #[error("cannot insert an empty word")]
    EmptyWord,

    /// A dictionary line which could not be turned into a word.
    #[error("invalid dictionary entry on line {line}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: Box<AutocompleteError>,
    },

    /// A dictionary line which is not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Reading the dictionary failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
