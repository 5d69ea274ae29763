//! Process command implementation

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_patterns, FileReader, WordCollector},
    language_source::LanguageSource,
    output::{JsonFormatter, OutputFormatter, TextFormatter},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use sylla_core::HyphenationPolicy;
use sylla_engine::{EngineConfig, ExecutionMode, Syllabifier, SyllabifyOptions};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Embedded language code (default: from config, else "en")
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// External language configuration file
    #[arg(long, value_name = "FILE", conflicts_with = "language")]
    pub language_config: Option<PathBuf>,

    /// Skip dictionary lookups
    #[arg(long)]
    pub no_dictionary: bool,

    /// Skip the pattern hyphenation fallback
    #[arg(long)]
    pub no_algorithmic: bool,

    /// Separator placed between syllables
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Minimum characters before the first break
    #[arg(long, value_name = "N")]
    pub min_prefix: Option<usize>,

    /// Minimum characters after the last break
    #[arg(long, value_name = "N")]
    pub min_suffix: Option<usize>,

    /// Force parallel processing even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one entry per line
    Text,
    /// JSON array of entries with their resolution
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting syllabification");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let words = self.collect_words()?;
        log::info!("Collected {} distinct words", words.len());

        let syllabifier = self.build_syllabifier(&config)?;
        let result = syllabifier.run(&words).map_err(CliError::from)?;

        let stats = result.stats();
        log::info!(
            "Syllabified {} words ({} dictionary, {} algorithmic, {} unchanged) in {:?}",
            result.len(),
            stats.dictionary,
            stats.algorithmic,
            stats.pass_through,
            result.elapsed()
        );

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        for entry in result.iter() {
            formatter.format_entry(entry)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Read every input file and collect its distinct words
    fn collect_words(&self) -> Result<Vec<String>> {
        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut collector = WordCollector::new();
        for file in &files {
            log::debug!("Reading {}", file.display());
            let text = FileReader::read_text(file)?;
            collector.add_text(&text);
            progress.file_completed(&file.display().to_string());
        }
        progress.finish();

        Ok(collector.into_words())
    }

    /// Merge command-line flags over the configuration file
    fn build_syllabifier(&self, config: &CliConfig) -> Result<Syllabifier> {
        let code = self
            .language
            .as_deref()
            .unwrap_or(config.processing.language.as_str());
        let source = LanguageSource::from_args(code, self.language_config.clone());
        log::info!("Language: {}", source.display_name());
        let resources = source.load().map_err(CliError::from)?;

        let options = SyllabifyOptions {
            use_dictionary: config.processing.use_dictionary && !self.no_dictionary,
            use_algorithmic: config.processing.use_algorithmic && !self.no_algorithmic,
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| config.processing.separator.clone()),
        };

        let base = resources.policy();
        let policy = HyphenationPolicy::new(
            self.min_prefix.unwrap_or(base.min_prefix),
            self.min_suffix.unwrap_or(base.min_suffix),
        );

        let engine_config = EngineConfig {
            execution_mode: if self.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Adaptive
            },
            threads: self.threads.or_else(|| config.threads()),
            parallel_threshold: config.performance.parallel_threshold,
        };
        engine_config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(Syllabifier::new(resources)
            .with_options(options)
            .with_policy(policy)
            .with_config(engine_config))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> ProcessArgs {
        ProcessArgs {
            input: vec![input.to_string()],
            output: None,
            format: OutputFormat::Text,
            language: None,
            language_config: None,
            no_dictionary: false,
            no_algorithmic: false,
            separator: None,
            min_prefix: None,
            min_suffix: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::from_toml(
            "[processing]\nseparator = \"-\"\n[performance]\nworker_threads = 3\n",
        )
        .unwrap();

        let mut args = args("unused.txt");
        args.no_dictionary = true;
        args.min_prefix = Some(1);
        args.threads = Some(2);

        let syllabifier = args.build_syllabifier(&config).unwrap();
        assert!(!syllabifier.options().use_dictionary);
        assert!(syllabifier.options().use_algorithmic);
        assert_eq!(syllabifier.options().separator, "-");
        assert_eq!(syllabifier.policy(), HyphenationPolicy::new(1, 2));
        assert_eq!(syllabifier.config().threads, Some(2));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut args = args("unused.txt");
        args.threads = Some(0);
        let err = args.build_syllabifier(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_unknown_language() {
        let mut args = args("unused.txt");
        args.language = Some("zz".to_string());
        let err = args.build_syllabifier(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("language 'zz' not found"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "Table, table.\nPresent").unwrap();

        let mut args = args(&input.to_string_lossy());
        args.output = Some(output.clone());
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "present\nta ble");
    }
}
