//! Configuration loading tests.

use anyhow::Result;
use arpeggio::ArpeggioConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_from_file_reads_all_sections() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("arpeggio.toml");
    fs::write(
        &path,
        r#"
[generation]
model = "claude-3-opus-20240229"
max_tokens = 2048
temperature = 0.5

[prompts]
template_dir = "prompt_library"
"#,
    )?;

    let config = ArpeggioConfig::from_file(&path)?;
    assert_eq!(config.generation.model, "claude-3-opus-20240229");
    assert_eq!(config.generation.max_tokens, 2048);
    assert_eq!(config.generation.temperature, 0.5);
    assert_eq!(config.prompts.template_dir.to_str(), Some("prompt_library"));
    Ok(())
}

#[test]
fn test_missing_fields_fall_back_to_defaults() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("arpeggio.toml");
    fs::write(&path, "[generation]\nmodel = \"claude-test\"\n")?;

    let config = ArpeggioConfig::from_file(&path)?;
    assert_eq!(config.generation.model, "claude-test");
    assert_eq!(config.generation.max_tokens, 4096);
    assert_eq!(config.generation.temperature, 0.0);
    assert_eq!(config.prompts.template_dir.to_str(), Some("templates"));
    Ok(())
}

#[test]
fn test_empty_file_yields_type_defaults() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("arpeggio.toml");
    fs::write(&path, "")?;

    let config = ArpeggioConfig::from_file(&path)?;
    assert_eq!(config, ArpeggioConfig::default());
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let result = ArpeggioConfig::from_file(&path);
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("arpeggio.toml");
    fs::write(&path, "[generation\nmodel = ")?;

    let result = ArpeggioConfig::from_file(&path);
    assert!(result.is_err());
    Ok(())
}
