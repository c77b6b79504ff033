//! Provides a Trie over the fixed [`crate::alphabet`] for storing the words
//! of a dictionary.
//!
//! Every node owns an array of optional children, one slot per
//! [`Symbol`], plus a flag recording whether the path from the root to the
//! node spells a complete word. Keys are supplied as anything which
//! implements `IntoIterator<Item = Symbol>`; the `*_word` convenience
//! methods accept text and validate it first.
//!
//! The trie is case sensitive and does no normalization of its own. Callers
//! use [`crate::alphabet::normalize`] on raw text before inserting it.
//!
//! Example 1
//! ```
//! use autocomplete::alphabet;
//! use autocomplete::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let input = alphabet::parse("APPLE").unwrap();
//! assert!(trie.insert(input.clone()).unwrap());
//!
//! // Anything which implements IntoIterator<Item=Symbol> can now be used
//! // to interact with our Trie
//! assert!(trie.contains(input.clone()));
//! assert!(trie.contains_prefix(alphabet::parse("APP").unwrap()));
//! assert!(!trie.contains(alphabet::parse("APP").unwrap()));
//! assert!(trie.remove(input.clone()));
//! assert!(!trie.contains(input));
//! ```
//!
//! Example 2
//! ```
//! use autocomplete::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert_word("BANANA").unwrap();
//! assert!(trie.contains_word("BANANA").unwrap());
//!
//! // Lowercase is not part of the alphabet
//! assert!(trie.insert_word("banana").is_err());
//! ```

use crate::alphabet::{self, Symbol, ALPHABET_SIZE};
use crate::errors::{AutocompleteError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Node {
    pub(crate) children: [Option<Box<Node>>; ALPHABET_SIZE],
    pub(crate) terminated: bool,
}

/// Stores words as paths of symbol nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trie {
    pub(crate) head: Node,
    count: usize,
}

impl Node {
    #[inline(always)]
    pub(crate) fn child(&self, symbol: Symbol) -> Option<&Node> {
        self.children[symbol.index()].as_deref()
    }

    fn child_or_insert(&mut self, symbol: Symbol) -> &mut Node {
        self.children[symbol.index()].get_or_insert_with(Box::default)
    }

    /// Children which are present, paired with their symbol, in ascending
    /// symbol order.
    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = (Symbol, &Node)> + '_ {
        Symbol::all()
            .zip(self.children.iter())
            .filter_map(|(symbol, child)| child.as_deref().map(|c| (symbol, c)))
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    // A node which neither ends a word nor leads to one
    fn is_dead(&self) -> bool {
        !self.terminated && !self.has_children()
    }

    fn remove(&mut self, key: &[Symbol]) -> bool {
        match key.split_first() {
            None => std::mem::replace(&mut self.terminated, false),
            Some((symbol, rest)) => {
                let slot = &mut self.children[symbol.index()];
                let removed = match slot {
                    Some(child) => child.remove(rest),
                    None => false,
                };
                if removed && slot.as_deref().map_or(false, Node::is_dead) {
                    *slot = None;
                }
                removed
            }
        }
    }
}

impl Trie {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.head = Node::default();
        self.count = 0;
    }

    /// Does the Trie contain the supplied word?
    pub fn contains<K: IntoIterator<Item = Symbol>>(&self, key: K) -> bool {
        self.find_prefix_anchor(key)
            .map_or(false, |node| node.terminated)
    }

    /// Does the Trie contain at least one word starting with the supplied
    /// prefix? The empty prefix matches any word.
    pub fn contains_prefix<P: IntoIterator<Item = Symbol>>(&self, prefix: P) -> bool {
        self.find_prefix_anchor(prefix)
            .map_or(false, |node| node.terminated || node.has_children())
    }

    /// How many distinct words does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Insert the word into the Trie. Returns true if the word was not
    /// previously present. Inserting a word which is already present leaves
    /// the Trie unchanged.
    pub fn insert<K: IntoIterator<Item = Symbol>>(&mut self, key: K) -> Result<bool> {
        let mut symbols = key.into_iter().peekable();
        if symbols.peek().is_none() {
            return Err(AutocompleteError::EmptyWord);
        }

        let mut node = &mut self.head;
        for symbol in symbols {
            node = node.child_or_insert(symbol);
        }
        let added = !std::mem::replace(&mut node.terminated, true);
        if added {
            self.count += 1;
        }
        Ok(added)
    }

    /// Validate and insert a word given as text.
    pub fn insert_word(&mut self, word: &str) -> Result<bool> {
        self.insert(alphabet::parse(word)?)
    }

    /// Validate a word given as text and check whether it is present.
    pub fn contains_word(&self, word: &str) -> Result<bool> {
        Ok(self.contains(alphabet::parse(word)?))
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Remove the word from the Trie. Returns true if the word was present.
    ///
    /// Nodes which no longer lead to any word are released, so the shape of
    /// the Trie is the same as if the word had never been inserted.
    pub fn remove<K: IntoIterator<Item = Symbol>>(&mut self, key: K) -> bool {
        let key: Vec<Symbol> = key.into_iter().collect();
        let removed = self.head.remove(&key);
        if removed {
            self.count -= 1;
        }
        removed
    }

    /// Validate a word given as text and remove it.
    pub fn remove_word(&mut self, word: &str) -> Result<bool> {
        Ok(self.remove(alphabet::parse(word)?))
    }

    /// Walk from the root along the prefix. Returns the node at the end of
    /// the prefix, or None if some symbol along the way has no child.
    pub(crate) fn find_prefix_anchor<P: IntoIterator<Item = Symbol>>(
        &self,
        prefix: P,
    ) -> Option<&Node> {
        prefix
            .into_iter()
            .try_fold(&self.head, |node, symbol| node.child(symbol))
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        let mut stack = vec![&self.head];
        let mut total = 0;
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children().map(|(_, child)| child));
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(word: &str) -> Vec<Symbol> {
        alphabet::parse(word).expect("valid word")
    }

    #[test]
    fn it_inserts_new_key() {
        let mut trie = Trie::new();
        assert!(trie.insert(key("ABCDEF")).unwrap());
    }

    #[test]
    fn it_finds_exact_key() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        assert!(trie.contains(key("ABCDEF")));
    }

    #[test]
    fn it_cannot_find_longer_key() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        assert!(!trie.contains(key("ABCDEFG")));
    }

    #[test]
    fn it_cannot_find_shorter_key() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        assert!(!trie.contains(key("ABCDE")));
    }

    #[test]
    fn it_can_find_multiple_overlapping_keys() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        trie.insert(key("ABC")).unwrap();
        assert!(trie.contains(key("ABC")));
        assert!(trie.contains(key("ABCDEF")));
    }

    #[test]
    fn it_can_find_prefix_keys() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        assert!(trie.contains_prefix(key("ABC")));
        assert!(trie.contains_prefix(key("ABCDEF")));
        assert!(!trie.contains_prefix(key("ABD")));
    }

    #[test]
    fn it_matches_empty_prefix_only_when_populated() {
        let mut trie = Trie::new();
        assert!(!trie.contains_prefix(key("")));
        trie.insert(key("Q")).unwrap();
        assert!(trie.contains_prefix(key("")));
    }

    #[test]
    fn it_rejects_empty_key() {
        let mut trie = Trie::new();
        assert!(matches!(
            trie.insert(key("")),
            Err(AutocompleteError::EmptyWord)
        ));
        assert!(trie.is_empty());
        assert!(!trie.contains(key("")));
    }

    #[test]
    fn it_rejects_invalid_words() {
        let mut trie = Trie::new();
        match trie.insert_word("AP-P") {
            Err(AutocompleteError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, '-');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(trie.is_empty());
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn it_can_remove_a_present_key() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        assert!(trie.contains(key("ABCDEF")));
        assert!(trie.remove(key("ABCDEF")));
        assert!(!trie.contains(key("ABCDEF")));
    }

    #[test]
    fn it_can_remove_a_missing_key() {
        let mut trie = Trie::new();
        assert!(!trie.remove(key("ABCDEF")));
        trie.insert(key("ABC")).unwrap();
        assert!(!trie.remove(key("AB")));
        assert!(!trie.remove(key("ABCD")));
        assert!(!trie.remove(key("")));
        assert!(trie.contains(key("ABC")));
    }

    #[test]
    fn it_prunes_dead_leaves_on_remove() {
        let mut trie = Trie::new();
        trie.insert(key("APP")).unwrap();
        let shape = trie.clone();
        trie.insert(key("APPLE")).unwrap();
        trie.insert(key("APPLY")).unwrap();
        assert_eq!(trie.node_count(), 7);

        assert!(trie.remove(key("APPLE")));
        assert_eq!(trie.node_count(), 6);
        assert!(trie.remove(key("APPLY")));
        assert_eq!(trie, shape);

        assert!(trie.remove(key("APP")));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn it_keeps_shared_path_when_removing_prefix_word() {
        let mut trie = Trie::new();
        trie.insert(key("APP")).unwrap();
        trie.insert(key("APPLE")).unwrap();
        assert!(trie.remove(key("APP")));
        assert!(!trie.contains(key("APP")));
        assert!(trie.contains(key("APPLE")));
        assert!(trie.contains_prefix(key("APP")));
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn it_can_create_an_empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn it_can_clear_a_trie() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.contains(key("ABCDEF")));
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn it_can_count_entries() {
        let mut trie = Trie::new();
        trie.insert(key("ABCDEF")).unwrap();
        assert_eq!(1, trie.count());
        assert!(!trie.insert(key("ABCDEF")).unwrap());
        assert!(!trie.insert(key("ABCDEF")).unwrap());
        assert_eq!(1, trie.count());
        trie.insert(key("ABC")).unwrap();
        assert_eq!(2, trie.count());
        trie.remove(key("ABCDEF"));
        assert_eq!(1, trie.count());
        trie.clear();
        assert_eq!(0, trie.count());
        assert!(trie.is_empty());
    }

    #[test]
    fn it_inserts_idempotently() {
        let mut once = Trie::new();
        once.insert(key("APPLE")).unwrap();
        once.insert(key("APP")).unwrap();

        let mut many = Trie::new();
        for _ in 0..5 {
            many.insert(key("APPLE")).unwrap();
            many.insert(key("APP")).unwrap();
        }
        assert_eq!(once, many);
        assert_eq!(once.node_count(), many.node_count());
        assert_eq!(many.count(), 2);
    }

    #[test]
    fn it_handles_text_conveniences() {
        let mut trie = Trie::new();
        assert!(trie.insert_word("KIWI").unwrap());
        assert!(trie.contains_word("KIWI").unwrap());
        assert!(!trie.contains_word("KIW").unwrap());
        assert!(trie.contains_word("kiwi").is_err());
        assert!(trie.remove_word("KIWI").unwrap());
        assert!(trie.is_empty());
    }

    #[test]
    fn it_finds_prefix_anchor() {
        let mut trie = Trie::new();
        trie.insert(key("APPLE")).unwrap();
        let anchor = trie.find_prefix_anchor(key("APP")).expect("anchor");
        assert!(!anchor.terminated);
        let children: Vec<char> = anchor.children().map(|(s, _)| s.as_char()).collect();
        assert_eq!(children, vec!['L']);
        assert!(trie.find_prefix_anchor(key("APX")).is_none());
        assert!(std::ptr::eq(
            trie.find_prefix_anchor(key("")).expect("root"),
            &trie.head
        ));
    }

    #[test]
    fn it_can_be_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trie>();
    }
}
