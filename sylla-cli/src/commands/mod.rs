//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Syllabify the words of one or more text files
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate an external language configuration
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List embedded languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines()? {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        match self {
            ListCommands::Languages => {
                lines.push("Available languages:".to_string());
                for code in sylla_engine::list_available_languages() {
                    let language = sylla_engine::get_language(code)?;
                    lines.push(format!(
                        "  {:<4} {} ({} patterns, {} dictionary entries)",
                        code,
                        language.name(),
                        language.table().len(),
                        language.dictionary().len()
                    ));
                }
            }
            ListCommands::Formats => {
                lines.push("Available output formats:".to_string());
                lines.push("  text  One syllabified word per line".to_string());
                lines.push("  json  JSON array with word, form and source".to_string());
            }
        }
        Ok(lines)
    }
}
