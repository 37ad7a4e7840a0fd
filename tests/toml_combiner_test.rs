use anyhow::Result;
use fragment_combiner::core::ConfigProvider;
use fragment_combiner::utils::validation::Validate;
use fragment_combiner::{CombinerEngine, CombinerPipeline, OutputFormat, TomlConfig};
use tempfile::TempDir;

/// TOML 設定檔走完整流程
#[test]
fn test_toml_config_drives_search() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("combiner.toml");

    std::fs::write(
        &config_path,
        r#"
[combiner]
name = "four-chunks"
description = "Pruned search over a small set"
version = "1.0.0"

[search]
fragments = ["DI", "NT", "TA", "OV"]
anchor = "D"
strategy = "pruned"

[output]
format = "json"
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.output_format(), OutputFormat::Json);

    let mut out = Vec::new();
    let summary = CombinerEngine::new(CombinerPipeline::new(&mut out, config)).run()?;
    assert_eq!(summary.words_emitted, 6);

    let words: Vec<String> = serde_json::from_slice(&out)?;
    assert_eq!(words[0], "DINTOVTA");
    assert_eq!(words.len(), 6);

    Ok(())
}

#[test]
fn test_toml_defaults_reproduce_reference_counts() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[combiner]
name = "duck"

[search]
fragments = ["MU", "DI", "TA", "NT", "OV", "DU", "CK", "ER", "SC"]
anchor = "D"
"#,
    )?;
    config.validate()?;

    let mut out = Vec::new();
    let summary = CombinerEngine::new(CombinerPipeline::new(&mut out, config)).run()?;

    assert_eq!(summary.words_emitted, 672);
    assert_eq!(summary.candidates_accepted, 672);
    assert_eq!(summary.duplicates_collapsed, 0);
    assert_eq!(String::from_utf8(out)?.lines().count(), 672);

    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, fragment_combiner::CombinerError::IoError(_)));
}

#[test]
fn test_empty_fragment_list_fails_validation() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[combiner]
name = "empty"

[search]
fragments = []
anchor = "D"
"#,
    )?;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("search.fragments"));
    Ok(())
}
