//! Provides Trie iterators.
//!
//! [`Completions`] walks the words below a node lazily, depth first, in
//! ascending symbol order. A node's own word is produced before the words
//! of its children, so the output is lexicographically sorted. Nothing is
//! visited until the next word is requested, so taking the first `n` items
//! only touches the part of the Trie needed to produce them.
//!
//! ```
//! use autocomplete::alphabet;
//! use autocomplete::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["APPLE", "APP", "APPLY", "BANANA"] {
//!     trie.insert_word(word).unwrap();
//! }
//! let all: Vec<String> = trie.iter().collect();
//! assert_eq!(all, vec!["APP", "APPLE", "APPLY", "BANANA"]);
//!
//! let prefix = alphabet::parse("APPL").unwrap();
//! let completions: Vec<String> = trie.completions(prefix).collect();
//! assert_eq!(completions, vec!["APPLE", "APPLY"]);
//! ```
use std::iter::FusedIterator;

use crate::alphabet::{self, Symbol};
use crate::trie::{Node, Trie};

#[derive(Debug)]
struct Frame<'a> {
    node: &'a Node,
    symbol: Option<Symbol>,
    // length of the path above this node
    depth: usize,
}

/// Iterator over the words stored below a prefix.
#[derive(Debug)]
pub struct Completions<'a> {
    prefix: String,
    path: Vec<Symbol>,
    stack: Vec<Frame<'a>>,
    visited: usize,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(prefix: String, anchor: &'a Node) -> Self {
        Self {
            prefix,
            path: vec![],
            stack: vec![Frame {
                node: anchor,
                symbol: None,
                depth: 0,
            }],
            visited: 0,
        }
    }

    pub(crate) fn empty(prefix: String) -> Self {
        Self {
            prefix,
            path: vec![],
            stack: vec![],
            visited: 0,
        }
    }

    /// The prefix every produced word starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// How many nodes have been visited so far.
    pub fn nodes_visited(&self) -> usize {
        self.visited
    }

    fn word(&self) -> String {
        let mut word = String::with_capacity(self.prefix.len() + self.path.len());
        word.push_str(&self.prefix);
        word.extend(self.path.iter().map(|s| s.as_char()));
        word
    }
}

impl<'a> Iterator for Completions<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            self.visited += 1;
            self.path.truncate(frame.depth);
            if let Some(symbol) = frame.symbol {
                self.path.push(symbol);
            }

            // Reversed so that the smallest symbol is popped first
            let depth = self.path.len();
            self.stack
                .extend(frame.node.children().rev().map(|(symbol, node)| Frame {
                    node,
                    symbol: Some(symbol),
                    depth,
                }));

            if frame.node.terminated {
                return Some(self.word());
            }
        }
        None
    }
}

impl<'a> FusedIterator for Completions<'a> {}

impl Trie {
    /// Create an iterator over every word in the Trie, in sorted order.
    pub fn iter(&self) -> Completions<'_> {
        self.into_iter()
    }

    /// Create an iterator over every word which starts with the prefix.
    /// The iterator is empty if no such word exists.
    pub fn completions<P: IntoIterator<Item = Symbol>>(&self, prefix: P) -> Completions<'_> {
        let prefix: Vec<Symbol> = prefix.into_iter().collect();
        let rendered = alphabet::render(&prefix);
        match self.find_prefix_anchor(prefix) {
            Some(anchor) => Completions::new(rendered, anchor),
            None => Completions::empty(rendered),
        }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Completions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Completions::new(String::new(), &self.head)
    }
}
