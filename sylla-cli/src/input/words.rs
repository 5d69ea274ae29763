//! Word collection from input text
//!
//! Input text is lowercased and split on whitespace. Punctuation at the
//! edges of each token is stripped; inner apostrophes and hyphens stay.
//! The collected list is deduplicated and sorted.

use std::collections::BTreeSet;

/// Lowercase `token` and trim non-alphanumeric characters from both ends
pub fn normalize_word(token: &str) -> String {
    token
        .trim_matches(|ch: char| !ch.is_alphanumeric())
        .to_lowercase()
}

/// Accumulates the distinct words of one or more texts
#[derive(Debug, Default)]
pub struct WordCollector {
    words: BTreeSet<String>,
}

impl WordCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every word of `text`
    pub fn add_text(&mut self, text: &str) {
        for token in text.split_whitespace() {
            let word = normalize_word(token);
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
    }

    /// Number of distinct words so far
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were collected
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sorted, deduplicated words
    pub fn into_words(self) -> Vec<String> {
        self.words.into_iter().collect()
    }
}
