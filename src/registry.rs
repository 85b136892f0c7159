use crate::symbol::{delimiter, fold, Symbol};
use std::ops::Range;

/// Identifier of an added string, assigned in insertion order starting at 0.
pub type WordId = usize;

/// Owns the growing text buffer and the word-id to original string mapping.
///
/// The buffer is append-only: every edge label in the tree is stored as a pair
/// of indices into it, so a symbol's index never changes once pushed.
#[derive(Debug, Default)]
pub(crate) struct WordRegistry {
    /// Concatenation of every folded word followed by its delimiter
    pub(crate) text: Vec<Symbol>,

    /// Original (unfolded) strings indexed by word-id
    words: Vec<String>,
}

impl WordRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(symbols: usize) -> Self {
        Self {
            text: Vec::with_capacity(symbols),
            words: Vec::new(),
        }
    }

    /// Appends a word and its delimiter to the buffer.
    ///
    /// Returns the new word-id and the range of freshly appended positions,
    /// or `None` for the empty string.
    pub(crate) fn add(&mut self, word: &str) -> Option<(WordId, Range<usize>)> {
        if word.is_empty() {
            return None;
        }

        let id = self.words.len();
        let start = self.text.len();

        self.text.extend(fold(word));
        self.text.extend(delimiter(id));
        self.words.push(word.to_owned());

        Some((id, start..self.text.len()))
    }

    /// Returns the original string recorded for a word-id.
    pub(crate) fn lookup(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Drops every word, keeping the buffer's allocation.
    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.words.clear();
    }

    /// Number of registered words.
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}
