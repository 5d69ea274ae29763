//! Liang pattern hyphenation
//!
//! ```text
//! word -> lowercase -> ".word." -> every substring looked up in the table
//!      -> max weight per gap -> odd weight = break allowed
//! ```
//!
//! The engine only borrows a [`PatternTable`]; it holds no other state, so
//! one table can serve any number of threads.

use crate::pattern::{fold_case, PatternTable, BOUNDARY};

/// Margins that forbid breaks close to the word edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HyphenationPolicy {
    /// Minimum characters before the first break
    pub min_prefix: usize,
    /// Minimum characters after the last break
    pub min_suffix: usize,
}

impl Default for HyphenationPolicy {
    fn default() -> Self {
        Self {
            min_prefix: 2,
            min_suffix: 2,
        }
    }
}

impl HyphenationPolicy {
    /// Create a policy with explicit margins
    pub const fn new(min_prefix: usize, min_suffix: usize) -> Self {
        Self {
            min_prefix,
            min_suffix,
        }
    }

    /// Policy that allows a break at every interior gap
    pub const fn unrestricted() -> Self {
        Self::new(0, 0)
    }

    /// Shortest word that may be split at all
    pub fn min_word_len(&self) -> usize {
        self.min_prefix
            .saturating_add(self.min_suffix)
            .saturating_add(1)
    }

    /// Whether a break after `offset` characters of a `word_len`-character
    /// word is permitted by the margins.
    pub fn allows(&self, offset: usize, word_len: usize) -> bool {
        word_len >= self.min_word_len()
            && offset >= self.min_prefix.max(1)
            && offset.saturating_add(self.min_suffix.max(1)) <= word_len
    }
}

/// Pattern-driven hyphenation over a borrowed table
#[derive(Debug, Clone, Copy)]
pub struct HyphenationEngine<'t> {
    table: &'t PatternTable,
    policy: HyphenationPolicy,
}

impl<'t> HyphenationEngine<'t> {
    /// Create an engine with the default policy
    pub fn new(table: &'t PatternTable) -> Self {
        Self {
            table,
            policy: HyphenationPolicy::default(),
        }
    }

    /// Replace the edge policy
    #[must_use]
    pub fn with_policy(mut self, policy: HyphenationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active edge policy
    pub fn policy(&self) -> HyphenationPolicy {
        self.policy
    }

    /// Maximum pattern weight at each interior gap of `word`.
    ///
    /// Entry `i` is the gap between characters `i` and `i + 1`. Neither the
    /// policy nor the parity rule is applied here.
    pub fn gap_weights(&self, word: &str) -> Vec<u8> {
        let folded: Vec<char> = word.chars().map(fold_case).collect();
        let n = folded.len();
        if n < 2 {
            return Vec::new();
        }

        let levels = self.working_levels(&folded);
        // levels[k] sits before working char k; working char k = word char k - 1.
        // Slots 0, 1, n + 1 and n + 2 touch the markers and are dropped.
        levels[2..=n].to_vec()
    }

    /// Scan every substring of the working form ".word." and merge the
    /// weights of each matching pattern with `max`.
    ///
    /// A `.` inside the word is not a boundary. Literals only carry `.` at
    /// their edges, so no range covering one of those characters is looked up.
    fn working_levels(&self, folded: &[char]) -> Vec<u8> {
        let mut work = String::with_capacity(folded.len() + 2);
        work.push(BOUNDARY);
        work.extend(folded);
        work.push(BOUNDARY);

        let bounds: Vec<usize> = work
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(work.len()))
            .collect();
        let work_len = bounds.len() - 1;

        // One slot before every working char plus one after the last.
        let mut levels = vec![0u8; work_len + 1];
        let max_len = self.table.max_literal_len();

        // Working char k is a literal '.' from the word, not a marker
        let inner_dot = |k: usize| k > 0 && k <= folded.len() && folded[k - 1] == BOUNDARY;

        for start in 0..work_len {
            if inner_dot(start) {
                continue;
            }
            let longest = max_len.min(work_len - start);
            for len in 1..=longest {
                if inner_dot(start + len - 1) {
                    break;
                }
                let Some(weights) = self.table.get(&work[bounds[start]..bounds[start + len]])
                else {
                    continue;
                };
                for (offset, &weight) in weights.iter().enumerate() {
                    let slot = &mut levels[start + offset];
                    *slot = (*slot).max(weight);
                }
            }
        }

        levels
    }

    /// Legal break flags, one per interior gap (`len(word) - 1` entries).
    ///
    /// A gap is legal iff its weight is odd and the policy allows it.
    pub fn compute_breakpoints(&self, word: &str) -> Vec<bool> {
        let weights = self.gap_weights(word);
        let word_len = weights.len() + 1;
        weights
            .iter()
            .enumerate()
            .map(|(gap, &weight)| weight % 2 == 1 && self.policy.allows(gap + 1, word_len))
            .collect()
    }

    /// Character offsets after which the word may be split
    pub fn break_offsets(&self, word: &str) -> Vec<usize> {
        self.compute_breakpoints(word)
            .iter()
            .enumerate()
            .filter_map(|(gap, &legal)| legal.then_some(gap + 1))
            .collect()
    }

    /// Split `word` into syllables at every legal break.
    ///
    /// Concatenating the result reproduces `word` exactly. An empty word
    /// yields no syllables.
    pub fn hyphenate_word(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }

        let breaks = self.compute_breakpoints(word);
        let mut pieces = Vec::with_capacity(breaks.iter().filter(|&&b| b).count() + 1);
        let mut current = String::new();

        for (idx, ch) in word.chars().enumerate() {
            current.push(ch);
            if breaks.get(idx).copied().unwrap_or(false) {
                pieces.push(std::mem::take(&mut current));
            }
        }
        pieces.push(current);

        pieces
    }

    /// Hyphenate and join the syllables with `separator`
    pub fn hyphenate_with(&self, word: &str, separator: &str) -> String {
        self.hyphenate_word(word).join(separator)
    }
}
