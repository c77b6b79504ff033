//! State of an interactive completion session.
//!
//! The session owns the text typed so far and the suggestions for it. Input
//! arrives one line at a time and is turned into a [`Command`]:
//!
//! | line                  | command                          |
//! |-----------------------|----------------------------------|
//! | empty, `:q` or `\r`   | [`Command::Commit`]              |
//! | `:a` or `\t`          | [`Command::AcceptTop`]           |
//! | `:d` or backspace     | [`Command::DeleteLast`]          |
//! | anything else         | [`Command::Append`]              |
//!
//! ```
//! use autocomplete::session::{Command, Session, Step};
//! use autocomplete::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["APPLE", "APP", "APPLY"] {
//!     trie.insert_word(word).unwrap();
//! }
//! let mut session = Session::new(&trie, 10);
//! session.apply(Command::parse("ap")).unwrap();
//! assert_eq!(session.suggestions(), ["APP", "APPLE", "APPLY"]);
//! session.apply(Command::parse(":a")).unwrap();
//! assert_eq!(session.buffer(), "APP");
//! assert_eq!(session.apply(Command::parse("")).unwrap(), Step::Finished("APP".to_string()));
//! ```

use crate::alphabet::{self, Symbol};
use crate::errors::{AutocompleteError, Result};
use crate::trie::Trie;

const BACKSPACE: &str = "\u{8}";

/// An action requested by one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// End the session with the current text.
    Commit,
    /// Replace the text with the first suggestion.
    AcceptTop,
    /// Remove the last character of the text.
    DeleteLast,
    /// Add characters to the end of the text.
    Append(String),
}

impl Command {
    /// Interpret one line of input. Every line is a command, there is no
    /// failure case.
    pub fn parse(line: &str) -> Self {
        match line {
            "" | "\r" | ":q" => Command::Commit,
            "\t" | ":a" => Command::AcceptTop,
            BACKSPACE | ":d" => Command::DeleteLast,
            text => Command::Append(text.to_string()),
        }
    }
}

/// Result of applying a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(String),
}

/// The text typed so far and the suggestions for it, over a borrowed
/// [`Trie`].
#[derive(Debug)]
pub struct Session<'t> {
    trie: &'t Trie,
    buffer: Vec<Symbol>,
    suggestions: Vec<String>,
    limit: usize,
}

impl<'t> Session<'t> {
    /// Start a session with an empty buffer. No suggestions are offered
    /// until the first command is applied.
    pub fn new(trie: &'t Trie, limit: usize) -> Self {
        Self {
            trie,
            buffer: vec![],
            suggestions: vec![],
            limit,
        }
    }

    /// The text typed so far.
    pub fn buffer(&self) -> String {
        alphabet::render(&self.buffer)
    }

    /// Suggestions for the buffer as of the last applied command.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Apply a command and refresh the suggestions.
    ///
    /// Appended text has its whitespace removed and is uppercased. If it
    /// still contains a character outside of the alphabet the buffer is left
    /// untouched and `InvalidSymbol` is returned, reporting the character as
    /// typed and its position within the appended text (whitespace
    /// included).
    pub fn apply(&mut self, command: Command) -> Result<Step> {
        match command {
            Command::Commit => return Ok(Step::Finished(self.buffer())),
            Command::AcceptTop => {
                if let Some(top) = self.suggestions.first() {
                    self.buffer = alphabet::parse(top)?;
                }
            }
            Command::DeleteLast => {
                self.buffer.pop();
            }
            Command::Append(text) => {
                let symbols = appended_symbols(&text)?;
                self.buffer.extend(symbols);
            }
        }
        self.suggestions = self
            .trie
            .suggest(self.buffer.iter().copied(), self.limit);
        Ok(Step::Continue)
    }
}

fn appended_symbols(text: &str) -> Result<Vec<Symbol>> {
    let mut symbols = vec![];
    for (position, symbol) in text.chars().enumerate() {
        if symbol.is_whitespace() {
            continue;
        }
        for upper in symbol.to_uppercase() {
            symbols.push(
                Symbol::from_char(upper)
                    .ok_or(AutocompleteError::InvalidSymbol { symbol, position })?,
            );
        }
    }
    Ok(symbols)
}
