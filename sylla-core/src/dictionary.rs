//! Exact-match syllabification overrides

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::pattern::fold_case;

/// Lines starting with this are ignored by [`Dictionary::parse`]
pub const COMMENT: char = '#';

/// Default syllable separator in dictionary sources
pub const DEFAULT_SEPARATOR: &str = "-";

/// Word to pre-syllabified form mapping.
///
/// Keys are lowercased on insertion and on lookup. A miss is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

fn normalize(word: &str) -> Cow<'_, str> {
    if word.chars().all(|ch| fold_case(ch) == ch) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.chars().map(fold_case).collect())
    }
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(word, form)` pairs. Later duplicates win.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (word, form) in entries {
            dictionary.insert(word.as_ref(), form);
        }
        dictionary
    }

    /// Parse a dictionary source.
    ///
    /// Each line is either `word<TAB>form` or a bare form such as
    /// `syl-la-ble`, whose key is the form with every `separator` removed.
    /// Blank lines and `#` comments are skipped.
    pub fn parse(text: &str, separator: &str) -> Result<Self> {
        let mut dictionary = Self::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end();
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                continue;
            }

            if let Some((word, form)) = line.split_once('\t') {
                let (word, form) = (word.trim(), form.trim());
                if word.is_empty() || form.is_empty() {
                    return Err(CoreError::DictionaryParse {
                        line: idx + 1,
                        reason: "tab-separated entry with an empty side",
                    });
                }
                dictionary.insert(word, form);
                continue;
            }

            let word = if separator.is_empty() {
                trimmed.to_string()
            } else {
                trimmed.replace(separator, "")
            };
            if word.is_empty() {
                return Err(CoreError::DictionaryParse {
                    line: idx + 1,
                    reason: "entry contains only separators",
                });
            }
            dictionary.insert(&word, trimmed);
        }

        Ok(dictionary)
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, word: &str, form: impl Into<String>) {
        self.entries
            .insert(normalize(word).into_owned(), form.into());
    }

    /// Stored form for `word`, or `None` when absent
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(normalize(word).as_ref()).map(String::as_str)
    }

    /// Whether `word` has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, form)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(word, form)| (word.as_str(), form.as_str()))
    }
}
