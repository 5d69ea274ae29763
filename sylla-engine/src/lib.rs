//! Language loading and batch orchestration for syllabification
//!
//! This crate wires the pattern engine and dictionary from `sylla-core`
//! to language resources and runs batches of words sequentially or in
//! parallel.
//!
//! ```
//! use sylla_engine::{Resolution, Syllabifier};
//!
//! let syllabifier = Syllabifier::for_language("en").unwrap();
//! let result = syllabifier.run(&["table", "window"]).unwrap();
//!
//! assert_eq!(result.get("table"), Some("ta ble"));
//! assert_eq!(result.iter().next().unwrap().resolution, Resolution::Dictionary);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod language;
pub mod output;
pub mod syllabifier;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use language::{get_language, list_available_languages, LanguageConfig, LanguageResources};
pub use output::{Resolution, RunStats, SyllabifiedWord, Syllabification};
pub use syllabifier::{syllabify, Syllabifier, SyllabifierBuilder, SyllabifyOptions};

// Re-export from core for convenience
pub use sylla_core::{Dictionary, HyphenationEngine, HyphenationPolicy, PatternTable};
