//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod words;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use words::{normalize_word, WordCollector};
