//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default language code
    pub language: String,

    /// Consult the language dictionary first
    pub use_dictionary: bool,

    /// Fall back to pattern hyphenation
    pub use_algorithmic: bool,

    /// Separator placed between syllables
    pub separator: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            use_dictionary: true,
            use_algorithmic: true,
            separator: " ".to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Word count from which processing goes parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            parallel_threshold: sylla_engine::config::defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        if config.performance.parallel_threshold == 0 {
            return Err(
                CliError::ConfigError("parallel_threshold must be greater than 0".into()).into(),
            );
        }
        Ok(config)
    }

    /// Worker thread count, `None` meaning one per CPU
    pub fn threads(&self) -> Option<usize> {
        match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.language, "en");
        assert!(config.processing.use_dictionary);
        assert!(config.processing.use_algorithmic);
        assert_eq!(config.processing.separator, " ");
        assert_eq!(config.threads(), None);
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::from_toml(
            r#"
[processing]
separator = "-"
use_dictionary = false

[performance]
worker_threads = 2
"#,
        )
        .unwrap();
        assert_eq!(config.processing.separator, "-");
        assert!(!config.processing.use_dictionary);
        assert_eq!(config.processing.language, "en");
        assert_eq!(config.threads(), Some(2));
        assert_eq!(config.performance.parallel_threshold, 2048);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml("[processing\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = CliConfig::from_toml("[performance]\nparallel_threshold = 0\n").unwrap_err();
        assert!(err.to_string().contains("parallel_threshold"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[processing]\nlanguage = \"english\"\n").unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.processing.language, "english");
    }
}
