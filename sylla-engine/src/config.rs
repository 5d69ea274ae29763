//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    ExecutionMode,
};

/// Default configuration constants
pub mod defaults {
    /// Batch size (in words) from which adaptive mode goes parallel
    pub const PARALLEL_THRESHOLD: usize = 2048;

    /// Separator placed between algorithmic syllables
    pub const SEPARATOR: &str = " ";
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum batch size in words for adaptive parallel processing
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Always fan out, optionally with a fixed thread count
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            threads,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".into(),
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(EngineError::ConfigError(
                "parallel_threshold must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
