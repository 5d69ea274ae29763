//! Pattern hyphenation core for syllabification
//!
//! This crate holds the deterministic part of Sylla: compiling a language's
//! TeX-style hyphenation patterns into a lookup table, computing legal
//! break points inside a word with Liang's algorithm, and exact-match
//! dictionary overrides. Nothing here performs I/O.
//!
//! # Example
//!
//! ```rust
//! use sylla_core::{HyphenationEngine, HyphenationPolicy, PatternTable};
//!
//! let table = PatternTable::parse(".ab1 1ba.").unwrap();
//! let engine = HyphenationEngine::new(&table).with_policy(HyphenationPolicy::new(1, 1));
//!
//! assert_eq!(engine.hyphenate_word("abba"), vec!["ab", "ba"]);
//! ```

#![warn(missing_docs)]

pub mod dictionary;
pub mod error;
pub mod hyphenator;
pub mod pattern;

pub use dictionary::Dictionary;
pub use error::{CoreError, Result};
pub use hyphenator::{HyphenationEngine, HyphenationPolicy};
pub use pattern::{parse_pattern, Pattern, PatternTable, BOUNDARY};
