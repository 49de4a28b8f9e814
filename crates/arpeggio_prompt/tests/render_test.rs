//! Tests for raw template rendering against a store directory.

use arpeggio_prompt::{FileTemplateStore, TemplateRenderer, TemplateVars};
use serde_json::json;

fn vars() -> TemplateVars {
    let mut vars = TemplateVars::new();
    vars.insert("name".into(), json!("sudoku"));
    vars.insert("puzzle".into(), json!({"size": 3, "grid": [[1, 2], [3, 4]]}));
    vars
}

#[test]
fn test_render_substitutes_into_raw_text() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("describe.toml"),
        "Solve {{name}} of size {{puzzle.size}}.",
    )?;

    let store = FileTemplateStore::new(dir.path());
    let rendered = store.render("describe", &vars())?;

    assert_eq!(rendered, "Solve sudoku of size 3.");
    Ok(())
}

#[test]
fn test_render_trims_placeholder_whitespace() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("padded.toml"), "{{ name }}")?;

    let store = FileTemplateStore::new(dir.path());
    assert_eq!(store.render("padded", &vars())?, "sudoku");
    Ok(())
}

#[test]
fn test_render_repeats_placeholder_everywhere() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("twice.toml"), "{{name}} then {{name}}")?;

    let store = FileTemplateStore::new(dir.path());
    assert_eq!(store.render("twice", &vars())?, "sudoku then sudoku");
    Ok(())
}
