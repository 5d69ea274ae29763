//! Basic tests for sylla-engine

use sylla_engine::*;

#[test]
fn test_engine_config_creation() {
    let config = EngineConfig::default();
    assert_eq!(config.parallel_threshold, 2048);
    assert_eq!(config.execution_mode, ExecutionMode::Adaptive);

    let sequential = EngineConfig::sequential();
    assert_eq!(sequential.threads, Some(1));
}

#[test]
fn test_execution_mode_selection() {
    use sylla_engine::executor::auto_select;

    let config = EngineConfig {
        threads: Some(4),
        ..EngineConfig::default()
    };
    assert_eq!(auto_select(10, &config), ExecutionMode::Sequential);
    assert_eq!(auto_select(2047, &config), ExecutionMode::Sequential);

    #[cfg(feature = "parallel")]
    assert_eq!(auto_select(2048, &config), ExecutionMode::Parallel);
}

#[test]
fn test_sequential_executor() {
    use sylla_engine::executor::SequentialExecutor;

    let words = ["a", "b"];
    let result = SequentialExecutor
        .execute(&words, |word| SyllabifiedWord {
            word: word.to_string(),
            form: format!("<{word}>"),
            resolution: Resolution::Algorithmic,
        })
        .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].form, "<a>");
    assert_eq!(result[1].form, "<b>");
}

#[test]
fn test_syllabifier_builder() {
    let syllabifier = SyllabifierBuilder::new()
        .language("en")
        .threads(Some(4))
        .parallel_threshold(50_000)
        .separator("-")
        .build()
        .unwrap();

    assert_eq!(syllabifier.resources().code(), "en");
    assert_eq!(syllabifier.options().separator, "-");
    assert_eq!(syllabifier.config().parallel_threshold, 50_000);
}

#[test]
fn test_builder_rejects_unknown_language() {
    let result = SyllabifierBuilder::new().language("zz").build();
    assert!(matches!(
        result,
        Err(EngineError::LanguageNotFound { ref code }) if code == "zz"
    ));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let result = SyllabifierBuilder::new().parallel_threshold(0).build();
    assert!(matches!(result, Err(EngineError::ConfigError(_))));
}

#[test]
fn test_syllabify_convenience() {
    let result = syllabify(&["table"], "en", SyllabifyOptions::default()).unwrap();
    assert_eq!(result.to_text(), "ta ble");
}
