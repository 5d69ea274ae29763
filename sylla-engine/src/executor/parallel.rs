//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    output::SyllabifiedWord,
};
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Words are independent, so the batch is mapped with rayon's indexed
/// iterators, which keep the input order on collect.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor. `None` uses the global rayon pool.
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }
}

impl Executor for ParallelExecutor {
    fn execute<W, F>(&self, words: &[W], resolve: F) -> Result<Vec<SyllabifiedWord>>
    where
        W: AsRef<str> + Sync,
        F: Fn(&str) -> SyllabifiedWord + Sync + Send,
    {
        let run = || {
            words
                .par_iter()
                .map(|word| resolve(word.as_ref()))
                .collect::<Vec<_>>()
        };

        match self.threads {
            None => Ok(run()),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        EngineError::ParallelError(format!("failed to create thread pool: {e}"))
                    })?;
                Ok(pool.install(run))
            }
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;
    use crate::output::Resolution;

    fn upper(word: &str) -> SyllabifiedWord {
        SyllabifiedWord {
            word: word.to_string(),
            form: word.to_uppercase(),
            resolution: Resolution::Algorithmic,
        }
    }

    #[test]
    fn test_matches_sequential_order() {
        let words: Vec<String> = (0..5000).map(|i| format!("w{i}")).collect();
        let sequential = SequentialExecutor.execute(&words, upper).unwrap();
        let parallel = ParallelExecutor::new(Some(4)).execute(&words, upper).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_global_pool() {
        let words = ["a", "b", "c"];
        let executor = ParallelExecutor::default();
        assert_eq!(executor.mode(), ExecutionMode::Parallel);
        let result = executor.execute(&words, upper).unwrap();
        let forms: Vec<_> = result.iter().map(|w| w.form.as_str()).collect();
        assert_eq!(forms, ["A", "B", "C"]);
    }
}
