//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use sylla_engine::SyllabifiedWord;

/// JSON formatter - outputs entries as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryData {
    /// The input word
    pub word: String,
    /// The syllabified form
    pub form: String,
    /// How the form was produced
    pub source: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, entry: &SyllabifiedWord) -> Result<()> {
        self.entries.push(EntryData {
            word: entry.word.clone(),
            form: entry.form.clone(),
            source: entry.resolution.as_str().to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
