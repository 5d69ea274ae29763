//! Language resources and the embedded language registry
//!
//! A language is described by a small TOML file naming its pattern list
//! and optional dictionary. English ships inside the binary; other
//! languages are loaded from disk with [`LanguageResources::from_config_file`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use log::debug;
use serde::{Deserialize, Serialize};
use sylla_core::{dictionary, Dictionary, HyphenationEngine, HyphenationPolicy, PatternTable};

use crate::error::{EngineError, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// `[metadata]` table
    pub metadata: Metadata,
    /// `[hyphenation]` table; margins default to 2/2
    #[serde(default)]
    pub hyphenation: HyphenationSettings,
    /// `[resources]` table
    pub resources: Resources,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code used for lookup, e.g. "en"
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Margins applied by the pattern engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HyphenationSettings {
    /// Minimum characters before the first break
    #[serde(default = "default_min_prefix")]
    pub min_prefix: usize,
    /// Minimum characters after the last break
    #[serde(default = "default_min_suffix")]
    pub min_suffix: usize,
}

impl Default for HyphenationSettings {
    fn default() -> Self {
        Self {
            min_prefix: default_min_prefix(),
            min_suffix: default_min_suffix(),
        }
    }
}

impl From<HyphenationSettings> for HyphenationPolicy {
    fn from(settings: HyphenationSettings) -> Self {
        HyphenationPolicy::new(settings.min_prefix, settings.min_suffix)
    }
}

/// Resource file locations, relative to the configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resources {
    /// TeX pattern file
    pub patterns: PathBuf,
    /// Optional exception dictionary
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    /// Syllable separator used in bare dictionary forms
    #[serde(default = "default_separator")]
    pub dictionary_separator: String,
}

fn default_min_prefix() -> usize {
    HyphenationPolicy::default().min_prefix
}

fn default_min_suffix() -> usize {
    HyphenationPolicy::default().min_suffix
}

fn default_separator() -> String {
    dictionary::DEFAULT_SEPARATOR.to_string()
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(text)
            .map_err(|e| EngineError::ConfigError(format!("failed to parse language config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(EngineError::ConfigError(
                "metadata.code must not be empty".to_string(),
            ));
        }

        if self.resources.dictionary_separator.is_empty() {
            return Err(EngineError::ConfigError(
                "resources.dictionary_separator must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Everything needed to syllabify one language
///
/// Built once and only read afterwards, so it is shared behind an `Arc`.
#[derive(Debug)]
pub struct LanguageResources {
    code: String,
    name: String,
    table: PatternTable,
    dictionary: Dictionary,
    policy: HyphenationPolicy,
}

impl LanguageResources {
    /// Assemble resources from already-parsed parts
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        table: PatternTable,
        dictionary: Dictionary,
        policy: HyphenationPolicy,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            table,
            dictionary,
            policy,
        }
    }

    /// Build resources from a configuration and the raw resource texts
    pub fn from_parts(
        config: &LanguageConfig,
        patterns: &str,
        dictionary: Option<&str>,
    ) -> Result<Self> {
        config.validate()?;

        let table = PatternTable::parse(patterns)?;
        let dictionary = match dictionary {
            Some(text) => Dictionary::parse(text, &config.resources.dictionary_separator)?,
            None => Dictionary::new(),
        };

        debug!(
            "Loaded language '{}': {} patterns, {} dictionary entries",
            config.metadata.code,
            table.len(),
            dictionary.len()
        );

        Ok(Self::new(
            config.metadata.code.clone(),
            config.metadata.name.clone(),
            table,
            dictionary,
            config.hyphenation.into(),
        ))
    }

    /// Load a language from a TOML configuration file on disk
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = LanguageConfig::from_toml(&read_resource(path)?)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let patterns = read_resource(&base.join(&config.resources.patterns))?;
        let dictionary = config
            .resources
            .dictionary
            .as_ref()
            .map(|file| read_resource(&base.join(file)))
            .transpose()?;

        Self::from_parts(&config, &patterns, dictionary.as_deref())
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pattern table
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Exception dictionary (possibly empty)
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Default margins for this language
    pub fn policy(&self) -> HyphenationPolicy {
        self.policy
    }

    /// Pattern engine over this language's table with its default policy
    pub fn engine(&self) -> HyphenationEngine<'_> {
        HyphenationEngine::new(&self.table).with_policy(self.policy)
    }
}

fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| EngineError::io(path, e))
}

type Registry = HashMap<&'static str, std::result::Result<Arc<LanguageResources>, String>>;

/// Embedded language resources
static EMBEDDED: OnceLock<Registry> = OnceLock::new();

/// Primary codes of the embedded languages
const EMBEDDED_CODES: &[&str] = &["en"];

fn embedded() -> &'static Registry {
    EMBEDDED.get_or_init(|| {
        let mut map = Registry::new();

        // Load English
        let english = load_embedded_language(
            include_str!("../configs/languages/en/language.toml"),
            include_str!("../configs/languages/en/patterns.txt"),
            Some(include_str!("../configs/languages/en/dictionary.txt")),
        );
        map.insert("english", english.clone());
        map.insert("en", english);

        map
    })
}

fn load_embedded_language(
    config: &str,
    patterns: &str,
    dictionary: Option<&str>,
) -> std::result::Result<Arc<LanguageResources>, String> {
    let config = LanguageConfig::from_toml(config).map_err(|e| e.to_string())?;
    LanguageResources::from_parts(&config, patterns, dictionary)
        .map(Arc::new)
        .map_err(|e| e.to_string())
}

/// Load embedded language resources by code
///
/// Codes are matched case-insensitively. The first call parses the
/// embedded resources; later calls share the same instance.
pub fn get_language(code: &str) -> Result<Arc<LanguageResources>> {
    let key = code.trim().to_lowercase();
    match embedded().get(key.as_str()) {
        Some(Ok(resources)) => Ok(Arc::clone(resources)),
        Some(Err(reason)) => Err(EngineError::ConfigError(format!(
            "embedded language '{key}' failed to load: {reason}"
        ))),
        None => Err(EngineError::LanguageNotFound {
            code: code.to_string(),
        }),
    }
}

/// Codes of the embedded languages, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes = EMBEDDED_CODES.to_vec();
    codes.sort_unstable();
    codes
}
