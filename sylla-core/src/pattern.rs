//! Hyphenation pattern compilation
//!
//! Patterns use TeX notation: letters interleaved with single-digit
//! weights, e.g. `hy3p` or `.ex5am`. A leading `.` anchors the pattern to
//! the start of a word and a trailing `.` anchors it to the end.
//!
//! ```text
//! "hy3p"   -> literal "hyp",  weights [0, 0, 3, 0]
//! ".ab4c"  -> literal ".abc", weights [0, 0, 0, 4, 0]
//! "2ph"    -> literal "ph",   weights [2, 0, 0]
//! ```

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::{CoreError, Result};

/// Word boundary marker used by anchored patterns and the working word form
pub const BOUNDARY: char = '.';

/// Start of a TeX comment; everything up to the end of the line is ignored
pub const COMMENT: char = '%';

/// Inter-character weights of one pattern. Length = literal chars + 1.
pub type Weights = SmallVec<[u8; 8]>;

/// A single compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Lowercased characters of the pattern with digits removed
    pub literal: String,
    /// Weight before each literal character, plus one after the last
    pub weights: Weights,
}

/// Lowercase a single character, keeping it unchanged when its lowercase
/// form is not exactly one character. Keeps char counts stable so break
/// offsets always line up with the caller's word.
pub(crate) fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Compile one pattern token.
pub fn parse_pattern(token: &str) -> Result<Pattern> {
    if token.is_empty() {
        return Err(CoreError::pattern(token, "empty token"));
    }

    let mut literal = String::with_capacity(token.len());
    let mut weights = Weights::new();
    let mut pending: Option<u8> = None;

    for ch in token.chars() {
        if let Some(digit) = ch.to_digit(10) {
            if pending.is_some() {
                return Err(CoreError::pattern(
                    token,
                    "more than one digit between two letters",
                ));
            }
            pending = Some(digit as u8);
        } else {
            weights.push(pending.take().unwrap_or(0));
            literal.push(fold_case(ch));
        }
    }
    weights.push(pending.unwrap_or(0));

    let char_count = literal.chars().count();
    if literal.chars().all(|ch| ch == BOUNDARY) {
        return Err(CoreError::pattern(token, "pattern has no letters"));
    }
    if literal
        .chars()
        .enumerate()
        .any(|(i, ch)| ch == BOUNDARY && i != 0 && i + 1 != char_count)
    {
        return Err(CoreError::pattern(
            token,
            "boundary marker inside the pattern",
        ));
    }

    debug_assert_eq!(weights.len(), char_count + 1);
    Ok(Pattern { literal, weights })
}

/// Split raw pattern text into tokens, dropping `%` comments
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.find(COMMENT).map_or(line, |pos| &line[..pos]))
        .flat_map(str::split_whitespace)
}

/// Compiled pattern lookup table for one language.
///
/// Maps each literal (boundary markers included) to its weights. Built once,
/// read-only afterwards. Duplicate literals keep the last definition.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: HashMap<String, Weights>,
    max_literal_len: usize,
}

impl PatternTable {
    /// Parse whitespace-separated pattern text.
    ///
    /// Fails on the first malformed token; no partial table is returned.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_patterns(tokens(text))
    }

    /// Build a table from already split pattern tokens
    pub fn from_patterns<'a, I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for token in patterns {
            table.insert(parse_pattern(token)?);
        }
        Ok(table)
    }

    fn insert(&mut self, pattern: Pattern) {
        let len = pattern.weights.len() - 1;
        self.max_literal_len = self.max_literal_len.max(len);
        self.patterns.insert(pattern.literal, pattern.weights);
    }

    /// Weights for an exact literal, if present
    #[inline]
    pub fn get(&self, literal: &str) -> Option<&[u8]> {
        self.patterns.get(literal).map(|weights| weights.as_slice())
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the table has no patterns at all
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Length in characters of the longest literal
    pub fn max_literal_len(&self) -> usize {
        self.max_literal_len
    }

    /// Iterate over `(literal, weights)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.patterns
            .iter()
            .map(|(literal, weights)| (literal.as_str(), weights.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interior_digit() {
        let pat = parse_pattern("hy3p").unwrap();
        assert_eq!(pat.literal, "hyp");
        assert_eq!(pat.weights.as_slice(), &[0, 0, 3, 0]);
    }

    #[test]
    fn test_parse_leading_and_trailing_digits() {
        let pat = parse_pattern("2ph").unwrap();
        assert_eq!(pat.weights.as_slice(), &[2, 0, 0]);

        let pat = parse_pattern("ab4").unwrap();
        assert_eq!(pat.literal, "ab");
        assert_eq!(pat.weights.as_slice(), &[0, 0, 4]);
    }

    #[test]
    fn test_parse_anchors() {
        let start = parse_pattern(".ex5am").unwrap();
        assert_eq!(start.literal, ".exam");
        assert_eq!(start.weights.as_slice(), &[0, 0, 0, 5, 0, 0]);

        let end = parse_pattern("4ism.").unwrap();
        assert_eq!(end.literal, "ism.");
        assert_eq!(end.weights.as_slice(), &[4, 0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_lowercases_literal() {
        let pat = parse_pattern("Ab1C").unwrap();
        assert_eq!(pat.literal, "abc");
    }

    #[test]
    fn test_parse_non_ascii_letters() {
        let pat = parse_pattern("ä1ö").unwrap();
        assert_eq!(pat.literal, "äö");
        assert_eq!(pat.weights.as_slice(), &[0, 1, 0]);
    }

    #[test]
    fn test_reject_misaligned_digits() {
        let err = parse_pattern("a12b").unwrap_err();
        match err {
            CoreError::PatternParse { token, .. } => assert_eq!(token, "a12b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reject_digit_only_and_empty() {
        assert!(parse_pattern("").is_err());
        assert!(parse_pattern("1").is_err());
        assert!(parse_pattern(".").is_err());
    }

    #[test]
    fn test_reject_interior_boundary() {
        assert!(parse_pattern("a.b").is_err());
        assert!(parse_pattern(".a.").is_ok());
    }

    #[test]
    fn test_tokens_skip_comments_and_whitespace() {
        let text = "% English patterns\n.ab1  a2c\tb1b % trailing\n\n1ba.\n";
        let collected: Vec<&str> = tokens(text).collect();
        assert_eq!(collected, vec![".ab1", "a2c", "b1b", "1ba."]);
    }

    #[test]
    fn test_table_last_duplicate_wins() {
        let table = PatternTable::parse("a1b a3b").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ab"), Some(&[0u8, 3, 0][..]));
    }

    #[test]
    fn test_table_max_literal_len() {
        let table = PatternTable::parse("a1b .abc4d 2e").unwrap();
        assert_eq!(table.max_literal_len(), 5);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_table_parse_error_names_token() {
        let err = PatternTable::parse("a1b ok x99y").unwrap_err();
        assert!(err.to_string().contains("x99y"));
    }

    #[test]
    fn test_empty_table() {
        let table = PatternTable::parse("  % nothing here\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.max_literal_len(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
