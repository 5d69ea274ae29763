//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use sylla_engine::LanguageResources;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        // Load the configuration along with its pattern and dictionary files
        match LanguageResources::from_config_file(&self.language_config) {
            Ok(resources) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", resources.code());
                println!("  Language name: {}", resources.name());
                println!("  Patterns: {}", resources.table().len());
                println!("  Dictionary entries: {}", resources.dictionary().len());
                let policy = resources.policy();
                println!(
                    "  Margins: min_prefix={}, min_suffix={}",
                    policy.min_prefix, policy.min_suffix
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
