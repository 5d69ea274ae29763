//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    ///
    /// Writes the TOML template and, next to it, an empty pattern file so
    /// the result validates straight away.
    pub fn execute(&self) -> Result<()> {
        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        let patterns = self
            .output
            .parent()
            .map(|dir| dir.join("patterns.txt"))
            .unwrap_or_else(|| PathBuf::from("patterns.txt"));
        if !patterns.exists() {
            fs::write(&patterns, PATTERNS_TEMPLATE)
                .with_context(|| format!("Failed to write to {}", patterns.display()))?;
        }

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add hyphenation patterns to {}", patterns.display());
        println!("2. Validate your configuration:");
        println!(
            "   sylla validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   sylla process -i words.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Margins: no break within this many characters of either end
[hyphenation]
min_prefix = 2
min_suffix = 2

# Resource files, relative to this configuration file
[resources]
# TeX-style patterns, whitespace separated, '%' starts a comment
patterns = "patterns.txt"

# Optional exception dictionary: one pre-syllabified word per line,
# or "word<TAB>form". '#' starts a comment.
# dictionary = "dictionary.txt"
# dictionary_separator = "-"
"#,
            code = self.language_code
        )
    }
}

const PATTERNS_TEMPLATE: &str = "% Hyphenation patterns, e.g. hy3ph he2n hen5at 1na n2at\n";
