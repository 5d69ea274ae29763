//! Execution strategies for batch syllabification

use crate::{config::EngineConfig, error::Result, output::SyllabifiedWord};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Pick sequential or parallel from the batch size
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Trait for execution strategies
///
/// Executors only decide how the per-word work is scheduled. The result
/// must always be in input order, one entry per word.
pub trait Executor: Send + Sync {
    /// Resolve every word with `resolve`, preserving input order
    fn execute<W, F>(&self, words: &[W], resolve: F) -> Result<Vec<SyllabifiedWord>>
    where
        W: AsRef<str> + Sync,
        F: Fn(&str) -> SyllabifiedWord + Sync + Send;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select a concrete execution mode for a batch
pub fn auto_select(word_count: usize, config: &EngineConfig) -> ExecutionMode {
    match config.execution_mode {
        ExecutionMode::Sequential => ExecutionMode::Sequential,
        ExecutionMode::Parallel => parallel_or_sequential(),
        ExecutionMode::Adaptive => {
            if word_count < config.parallel_threshold || available_threads(config) < 2 {
                ExecutionMode::Sequential
            } else {
                parallel_or_sequential()
            }
        }
    }
}

fn parallel_or_sequential() -> ExecutionMode {
    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}

fn available_threads(config: &EngineConfig) -> usize {
    if let Some(threads) = config.threads {
        return threads;
    }

    #[cfg(feature = "parallel")]
    return num_cpus::get();

    #[cfg(not(feature = "parallel"))]
    1
}
