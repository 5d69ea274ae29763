//! Layered error types
//!
//! Deterministic construction failures come from `sylla-core` and are
//! wrapped here next to the failures only the engine can hit: missing
//! languages, bad configuration, resource I/O and thread pool setup.

use std::path::PathBuf;

use sylla_core::CoreError;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Pattern or dictionary construction failed
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// No embedded or external resources for the requested language
    #[error("language '{code}' not found")]
    LanguageNotFound {
        /// The language code that was requested
        code: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Reading a language resource failed
    #[error("I/O error reading {}: {source}", path.display())]
    IoError {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
