use crate::types::{Token, TokenRef};
use crate::utils::split_into_words;
use std::collections::HashSet;

/// An immutable set of tokens excluded from document content and query terms.
///
/// The set is built once from a configuration line and then passed by value
/// into `SearchServer::new`, so stop-word configuration always precedes
/// ingestion and can never change underneath an existing index.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<Token>,
}

impl StopWordSet {
    /// Creates an empty set, for corpora with no stop words configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from a space-separated line of stop words.
    ///
    /// The line is split with the same space-splitting used for document
    /// bodies, without any filtering, and every resulting token is inserted.
    /// Note that a doubled space therefore turns the empty token into a
    /// stop word. Building from the same line twice yields an equal set.
    pub fn from_text(text: &str) -> Self {
        let mut words = HashSet::new();
        for word in split_into_words(text) {
            words.insert(word);
        }
        StopWordSet { words }
    }

    pub fn contains(&self, word: &TokenRef) -> bool {
        self.words.contains(word)
    }

    /// Returns the subsequence of `words` that are not stop words, preserving order.
    pub fn filter(&self, words: Vec<Token>) -> Vec<Token> {
        words
            .into_iter()
            .filter(|word| !self.contains(word))
            .collect()
    }

    /// Gets the total number of unique stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
