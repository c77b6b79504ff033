//! Provides a prefix autocomplete engine for a dictionary of words.
//!
//! Words are stored in a [`crate::trie::Trie`] keyed by the symbols of a
//! fixed alphabet (the uppercase letters, see [`crate::alphabet`]). Given a
//! prefix, the suggestion engine returns a bounded, sorted list of the
//! stored words which start with it.
//!
//! Keys are supplied as anything which implements
//! `IntoIterator<Item = Symbol>`. Raw text is converted with
//! [`crate::alphabet::parse`], which is the only place where a character
//! outside of the alphabet can be rejected.
//!
//! ```
//! use autocomplete::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["APPLE", "APP", "APPLY", "BANANA"] {
//!     trie.insert_word(word).unwrap();
//! }
//! assert_eq!(trie.suggest_word("APP", 10).unwrap(), vec!["APP", "APPLE", "APPLY"]);
//! assert_eq!(trie.suggest_word("APP", 1).unwrap(), vec!["APP"]);
//! assert!(trie.suggest_word("Z", 10).unwrap().is_empty());
//! ```
//!
//! Modules:
//! * alphabet : [`crate::alphabet`]
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * suggest : [`crate::suggest`]
//! * loader : [`crate::loader`]
//! * session : [`crate::session`]

pub mod alphabet;
pub mod errors;
pub mod iterator;
pub mod loader;
pub mod session;
pub mod suggest;
pub mod trie;

pub use alphabet::Symbol;
pub use errors::{AutocompleteError, Result};
pub use suggest::DEFAULT_LIMIT;
pub use trie::Trie;
