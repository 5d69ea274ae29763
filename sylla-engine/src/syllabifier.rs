//! Syllabifier and builder
//!
//! For each word the dictionary is consulted first; on a miss the pattern
//! engine splits the word and the syllables are joined with the configured
//! separator. Words neither path resolves are passed through unchanged.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace, warn};
use sylla_core::{HyphenationEngine, HyphenationPolicy};

use crate::{
    config::{defaults, EngineConfig},
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    language::{get_language, LanguageResources},
    output::{Resolution, SyllabifiedWord, Syllabification},
};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Which resolution paths a run may use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabifyOptions {
    /// Consult the exception dictionary first
    pub use_dictionary: bool,
    /// Fall back to pattern hyphenation on a dictionary miss
    pub use_algorithmic: bool,
    /// Joins algorithmic syllables
    pub separator: String,
}

impl Default for SyllabifyOptions {
    fn default() -> Self {
        Self {
            use_dictionary: true,
            use_algorithmic: true,
            separator: defaults::SEPARATOR.to_string(),
        }
    }
}

impl SyllabifyOptions {
    /// Dictionary lookups only
    pub fn dictionary_only() -> Self {
        Self {
            use_algorithmic: false,
            ..Self::default()
        }
    }

    /// Pattern hyphenation only
    pub fn algorithmic_only() -> Self {
        Self {
            use_dictionary: false,
            ..Self::default()
        }
    }

    /// Set the syllable separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Batch syllabifier for one language
///
/// Holds shared, read-only language resources; a single instance can be
/// reused across runs and threads.
#[derive(Debug, Clone)]
pub struct Syllabifier {
    resources: Arc<LanguageResources>,
    options: SyllabifyOptions,
    policy: HyphenationPolicy,
    config: EngineConfig,
}

impl Syllabifier {
    /// Create a syllabifier over loaded resources with default options
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        let policy = resources.policy();
        Self {
            resources,
            options: SyllabifyOptions::default(),
            policy,
            config: EngineConfig::default(),
        }
    }

    /// Create a syllabifier for an embedded language
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(get_language(code)?))
    }

    /// Start a builder
    pub fn builder() -> SyllabifierBuilder {
        SyllabifierBuilder::new()
    }

    /// Replace the resolution options
    pub fn with_options(mut self, options: SyllabifyOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the language's hyphenation margins
    pub fn with_policy(mut self, policy: HyphenationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the execution configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Language resources in use
    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Resolution options in use
    pub fn options(&self) -> &SyllabifyOptions {
        &self.options
    }

    /// Hyphenation margins in use
    pub fn policy(&self) -> HyphenationPolicy {
        self.policy
    }

    /// Execution configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn engine(&self) -> HyphenationEngine<'_> {
        HyphenationEngine::new(self.resources.table()).with_policy(self.policy)
    }

    /// Resolve a single word
    pub fn syllabify_word(&self, word: &str) -> SyllabifiedWord {
        self.resolve(&self.engine(), word)
    }

    fn resolve(&self, engine: &HyphenationEngine<'_>, word: &str) -> SyllabifiedWord {
        let (form, resolution) = if word.trim().is_empty() {
            (String::new(), Resolution::Empty)
        } else if let Some(form) = self
            .options
            .use_dictionary
            .then(|| self.resources.dictionary().lookup(word))
            .flatten()
        {
            (form.to_string(), Resolution::Dictionary)
        } else if self.options.use_algorithmic {
            (
                engine.hyphenate_with(word, &self.options.separator),
                Resolution::Algorithmic,
            )
        } else {
            (word.to_string(), Resolution::PassThrough)
        };

        trace!("'{word}' -> '{form}' ({})", resolution.as_str());

        SyllabifiedWord {
            word: word.to_string(),
            form,
            resolution,
        }
    }

    /// Syllabify a batch, choosing the execution mode from the configuration
    pub fn run<W>(&self, words: &[W]) -> Result<Syllabification>
    where
        W: AsRef<str> + Sync,
    {
        self.run_with_mode(words, self.config.execution_mode)
    }

    /// Syllabify a batch with a specific execution mode
    ///
    /// The output is the same in every mode; only scheduling differs.
    pub fn run_with_mode<W>(&self, words: &[W], mode: ExecutionMode) -> Result<Syllabification>
    where
        W: AsRef<str> + Sync,
    {
        self.config.validate()?;

        let config = EngineConfig {
            execution_mode: mode,
            ..self.config.clone()
        };
        let mode = auto_select(words.len(), &config);
        debug!(
            "Syllabifying {} words in {} mode (language '{}')",
            words.len(),
            mode.as_str(),
            self.resources.code()
        );

        let start = Instant::now();
        let engine = self.engine();
        let resolve = |word: &str| self.resolve(&engine, word);

        let (entries, mode_used) = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                run_on(&ParallelExecutor::new(config.threads), words, resolve)?
            }
            _ => run_on(&SequentialExecutor, words, resolve)?,
        };

        let result = Syllabification::new(entries, mode_used, start.elapsed());

        let stats = result.stats();
        if stats.pass_through > 0 {
            warn!(
                "{} of {} words were not resolved and were passed through unchanged",
                stats.pass_through,
                result.len()
            );
        }
        debug!(
            "Resolved {} words: {} dictionary, {} algorithmic, {} empty in {:?}",
            stats.total(),
            stats.dictionary,
            stats.algorithmic,
            stats.empty,
            result.elapsed()
        );

        Ok(result)
    }
}

/// Run a batch on `executor` and report the mode it ran in
fn run_on<E, W, F>(
    executor: &E,
    words: &[W],
    resolve: F,
) -> Result<(Vec<SyllabifiedWord>, ExecutionMode)>
where
    E: Executor,
    W: AsRef<str> + Sync,
    F: Fn(&str) -> SyllabifiedWord + Sync + Send,
{
    Ok((executor.execute(words, resolve)?, executor.mode()))
}

/// Builder for [`Syllabifier`]
#[derive(Debug, Clone)]
pub struct SyllabifierBuilder {
    language: String,
    language_config: Option<PathBuf>,
    options: SyllabifyOptions,
    policy: Option<HyphenationPolicy>,
    config: EngineConfig,
}

impl Default for SyllabifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SyllabifierBuilder {
    /// Create a new builder for English with default options
    pub fn new() -> Self {
        Self {
            language: "en".to_string(),
            language_config: None,
            options: SyllabifyOptions::default(),
            policy: None,
            config: EngineConfig::default(),
        }
    }

    /// Set the embedded language code
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Load the language from an external TOML configuration instead
    pub fn language_config<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.language_config = Some(path.into());
        self
    }

    /// Enable or disable dictionary lookups
    pub fn use_dictionary(mut self, enabled: bool) -> Self {
        self.options.use_dictionary = enabled;
        self
    }

    /// Enable or disable the pattern fallback
    pub fn use_algorithmic(mut self, enabled: bool) -> Self {
        self.options.use_algorithmic = enabled;
        self
    }

    /// Set the syllable separator
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.options.separator = separator.into();
        self
    }

    /// Override the hyphenation margins
    pub fn policy(mut self, policy: HyphenationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the word count from which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Load the language and build the syllabifier
    pub fn build(self) -> Result<Syllabifier> {
        self.config.validate()?;

        let resources = match &self.language_config {
            Some(path) => Arc::new(LanguageResources::from_config_file(path)?),
            None => get_language(&self.language)?,
        };

        let mut syllabifier = Syllabifier::new(resources)
            .with_options(self.options)
            .with_config(self.config);
        if let Some(policy) = self.policy {
            syllabifier = syllabifier.with_policy(policy);
        }

        Ok(syllabifier)
    }
}

/// Syllabify `words` with an embedded language
pub fn syllabify<W>(words: &[W], language: &str, options: SyllabifyOptions) -> Result<Syllabification>
where
    W: AsRef<str> + Sync,
{
    Syllabifier::for_language(language)?
        .with_options(options)
        .run(words)
}
