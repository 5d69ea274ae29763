//! Core error types (deterministic only)

use std::fmt;

/// Core construction errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A hyphenation pattern token could not be parsed
    PatternParse {
        /// The offending token, verbatim
        token: String,
        /// What is wrong with it
        reason: &'static str,
    },
    /// A dictionary line could not be parsed
    DictionaryParse {
        /// 1-based line number in the dictionary source
        line: usize,
        /// What is wrong with it
        reason: &'static str,
    },
}

impl CoreError {
    pub(crate) fn pattern(token: &str, reason: &'static str) -> Self {
        CoreError::PatternParse {
            token: token.to_string(),
            reason,
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::PatternParse { token, reason } => {
                write!(f, "invalid hyphenation pattern '{token}': {reason}")
            }
            CoreError::DictionaryParse { line, reason } => {
                write!(f, "invalid dictionary entry on line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
