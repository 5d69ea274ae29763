//! Language source management for CLI

use std::path::PathBuf;
use std::sync::Arc;

use sylla_engine::{get_language, LanguageResources, Result};

/// Source of language resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Embedded language, by code
    BuiltIn(String),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl LanguageSource {
    /// Pick the external file when given, otherwise the embedded code
    pub fn from_args(code: &str, language_config: Option<PathBuf>) -> Self {
        match language_config {
            Some(path) => LanguageSource::External { path },
            None => LanguageSource::BuiltIn(code.to_string()),
        }
    }

    /// Load the resources this source points at
    pub fn load(&self) -> Result<Arc<LanguageResources>> {
        match self {
            LanguageSource::BuiltIn(code) => get_language(code),
            LanguageSource::External { path } => {
                LanguageResources::from_config_file(path).map(Arc::new)
            }
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }
}
