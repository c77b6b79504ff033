//! The suggestion engine: bounded completion of a prefix.
//!
//! A suggestion is the first `limit` words produced by
//! [`crate::iterator::Completions`] for the prefix. Since completions are
//! produced lazily, the traversal stops as soon as the cap is reached.
//!
//! ```
//! use autocomplete::alphabet;
//! use autocomplete::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["APPLE", "APP", "APPLY", "BANANA"] {
//!     trie.insert_word(word).unwrap();
//! }
//! assert_eq!(trie.suggest(alphabet::parse("APP").unwrap(), 10), vec!["APP", "APPLE", "APPLY"]);
//! assert_eq!(trie.suggest(alphabet::parse("APP").unwrap(), 1), vec!["APP"]);
//! assert!(trie.suggest_word("Z", 10).unwrap().is_empty());
//! ```

use log::trace;

use crate::alphabet::{self, Symbol};
use crate::errors::Result;
use crate::trie::Trie;

/// How many suggestions are offered when nothing else is configured.
pub const DEFAULT_LIMIT: usize = 10;

impl Trie {
    /// Return at most `limit` words starting with `prefix`, in sorted order.
    /// An unknown prefix (or a limit of 0) yields no suggestions.
    pub fn suggest<P: IntoIterator<Item = Symbol>>(&self, prefix: P, limit: usize) -> Vec<String> {
        let mut completions = self.completions(prefix);
        let suggestions: Vec<String> = completions.by_ref().take(limit).collect();
        trace!(
            "suggest {:?}: {} of at most {} after visiting {} nodes",
            completions.prefix(),
            suggestions.len(),
            limit,
            completions.nodes_visited()
        );
        suggestions
    }

    /// Validate a prefix given as text, then [`Trie::suggest`].
    pub fn suggest_word(&self, prefix: &str, limit: usize) -> Result<Vec<String>> {
        Ok(self.suggest(alphabet::parse(prefix)?, limit))
    }
}

/// Join suggestions for display, e.g. `APP, APPLE, APPLY`.
pub fn format_suggestions<S: AsRef<str>>(suggestions: &[S]) -> String {
    suggestions
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
}
