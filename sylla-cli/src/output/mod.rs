//! Output formatting module

use anyhow::Result;
use sylla_engine::SyllabifiedWord;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single entry
    fn format_entry(&mut self, entry: &SyllabifiedWord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
