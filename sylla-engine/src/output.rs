//! Syllabification results
//!
//! A run produces one [`SyllabifiedWord`] per input word, in input order.
//! The persisted form is [`Syllabification::to_text`]: one entry per line.

use std::collections::HashMap;
use std::time::Duration;

use crate::executor::ExecutionMode;

/// How a word got its syllabified form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Found in the language dictionary
    Dictionary,
    /// Split by the pattern hyphenation engine
    Algorithmic,
    /// Resolved by neither path; emitted unchanged
    PassThrough,
    /// Empty or whitespace-only input; no syllables
    Empty,
}

impl Resolution {
    /// Short lowercase name, used in logs and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Dictionary => "dictionary",
            Resolution::Algorithmic => "algorithmic",
            Resolution::PassThrough => "pass-through",
            Resolution::Empty => "empty",
        }
    }
}

/// One input word and its output form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabifiedWord {
    /// The word as given
    pub word: String,
    /// Dictionary form, joined syllables, or the word itself
    pub form: String,
    /// Which path produced `form`
    pub resolution: Resolution,
}

/// Per-resolution counts for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Words resolved from the dictionary
    pub dictionary: usize,
    /// Words split by patterns
    pub algorithmic: usize,
    /// Words emitted unchanged
    pub pass_through: usize,
    /// Blank words
    pub empty: usize,
}

impl RunStats {
    /// Total words counted
    pub fn total(&self) -> usize {
        self.dictionary + self.algorithmic + self.pass_through + self.empty
    }
}

/// Ordered result of a syllabification run
#[derive(Debug, Clone)]
pub struct Syllabification {
    entries: Vec<SyllabifiedWord>,
    mode_used: ExecutionMode,
    elapsed: Duration,
}

impl Syllabification {
    pub(crate) fn new(
        entries: Vec<SyllabifiedWord>,
        mode_used: ExecutionMode,
        elapsed: Duration,
    ) -> Self {
        Self {
            entries,
            mode_used,
            elapsed,
        }
    }

    /// Number of entries (equals the number of input words)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the run had no input words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in input order
    pub fn iter(&self) -> std::slice::Iter<'_, SyllabifiedWord> {
        self.entries.iter()
    }

    /// Entries in input order
    pub fn entries(&self) -> &[SyllabifiedWord] {
        &self.entries
    }

    /// Output form of the first entry for `word`
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.form.as_str())
    }

    /// Output forms in input order
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.form.as_str())
    }

    /// Word to form mapping. With duplicate input words the first wins.
    pub fn to_map(&self) -> HashMap<&str, &str> {
        let mut map = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            map.entry(entry.word.as_str())
                .or_insert(entry.form.as_str());
        }
        map
    }

    /// Newline-joined forms, one entry per line, no trailing newline
    pub fn to_text(&self) -> String {
        self.forms().collect::<Vec<_>>().join("\n")
    }

    /// Counts per resolution
    pub fn stats(&self) -> RunStats {
        let mut stats = RunStats::default();
        for entry in &self.entries {
            match entry.resolution {
                Resolution::Dictionary => stats.dictionary += 1,
                Resolution::Algorithmic => stats.algorithmic += 1,
                Resolution::PassThrough => stats.pass_through += 1,
                Resolution::Empty => stats.empty += 1,
            }
        }
        stats
    }

    /// Execution mode that was actually used
    pub fn mode_used(&self) -> ExecutionMode {
        self.mode_used
    }

    /// Wall-clock time spent on the run
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl<'a> IntoIterator for &'a Syllabification {
    type Item = &'a SyllabifiedWord;
    type IntoIter = std::slice::Iter<'a, SyllabifiedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
