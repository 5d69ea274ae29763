//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use sylla_engine::SyllabifiedWord;

/// Plain text formatter - outputs one entry per line
///
/// Lines are newline-joined with no trailing newline after the last one.
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, entry: &SyllabifiedWord) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        write!(self.writer, "{}", entry.form)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
