//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    output::SyllabifiedWord,
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute<W, F>(&self, words: &[W], resolve: F) -> Result<Vec<SyllabifiedWord>>
    where
        W: AsRef<str> + Sync,
        F: Fn(&str) -> SyllabifiedWord + Sync + Send,
    {
        Ok(words.iter().map(|word| resolve(word.as_ref())).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
