//! Tests for prompt composition and template rendering.
//!
//! These tests verify that the composer flattens rendered templates into
//! ordered message lists and reports format problems against the offending
//! template id.

use arpeggio_core::Role;
use arpeggio_error::{ArpeggioErrorKind, TemplateErrorKind};
use arpeggio_prompt::{FileTemplateStore, PromptComposer, TemplateVars};
use serde_json::json;

fn composer_for(dir: &std::path::Path) -> PromptComposer {
    PromptComposer::new(Box::new(FileTemplateStore::new(dir)))
}

fn write_template(dir: &std::path::Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_single_record_template_wraps_as_one_element_list() {
    let toml = r#"
role = "user"
content = "Solve the puzzle."
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    write_template(temp_dir.path(), "solve.toml", toml);

    let composer = composer_for(temp_dir.path());
    let messages = composer
        .compose(&["solve".to_string()], &TemplateVars::new())
        .unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "Solve the puzzle.");
}

#[test]
fn test_exchange_template_preserves_within_template_order() {
    let toml = r#"
[[message]]
role = "system"
content = "You solve abstract reasoning puzzles."

[[message]]
role = "user"
content = "Here is an example."

[[message]]
role = "assistant"
content = "Understood."
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    write_template(temp_dir.path(), "warmup.toml", toml);

    let composer = composer_for(temp_dir.path());
    let messages = composer
        .compose(&["warmup".to_string()], &TemplateVars::new())
        .unwrap();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[2].role, Role::Assistant);
}

#[test]
fn test_composition_is_associative_over_template_order() {
    let first = r#"
role = "system"
content = "First."
"#;
    let second = r#"
[[message]]
role = "user"
content = "Second."

[[message]]
role = "assistant"
content = "Third."
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    write_template(temp_dir.path(), "first.toml", first);
    write_template(temp_dir.path(), "second.toml", second);

    let composer = composer_for(temp_dir.path());
    let vars = TemplateVars::new();

    let combined = composer
        .compose(&["first".to_string(), "second".to_string()], &vars)
        .unwrap();
    let mut separate = composer.compose(&["first".to_string()], &vars).unwrap();
    separate.extend(composer.compose(&["second".to_string()], &vars).unwrap());

    assert_eq!(combined, separate);
    assert_eq!(combined.len(), 3);
    assert_eq!(combined[0].content, "First.");
    assert_eq!(combined[2].content, "Third.");
}

#[test]
fn test_unknown_template_id_fails_with_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let composer = composer_for(temp_dir.path());

    let err = composer
        .compose(&["missing".to_string()], &TemplateVars::new())
        .unwrap_err();

    match err.kind() {
        ArpeggioErrorKind::Template(te) => match &te.kind {
            TemplateErrorKind::NotFound(id) => assert_eq!(id, "missing"),
            other => panic!("expected NotFound, got {other}"),
        },
        other => panic!("expected template error, got {other}"),
    }
}

#[test]
fn test_invalid_shape_fails_naming_the_template() {
    // Valid TOML, but neither a role/content record nor a [[message]] list.
    let toml = r#"
title = "not a prompt"
body = "free-form prose"
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    write_template(temp_dir.path(), "prose.toml", toml);

    let composer = composer_for(temp_dir.path());
    let err = composer
        .compose(&["prose".to_string()], &TemplateVars::new())
        .unwrap_err();

    match err.kind() {
        ArpeggioErrorKind::Template(te) => match &te.kind {
            TemplateErrorKind::Format { template, .. } => assert_eq!(template, "prose"),
            other => panic!("expected Format, got {other}"),
        },
        other => panic!("expected template error, got {other}"),
    }
}

#[test]
fn test_placeholders_substitute_from_variables() {
    let toml = r#"
role = "user"
content = '''
Puzzle {{puzzle_name}}:

{{grid}}
'''
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    write_template(temp_dir.path(), "puzzle.toml", toml);

    let mut vars = TemplateVars::new();
    vars.insert("puzzle_name".into(), json!("identity"));
    vars.insert("grid".into(), json!([[1, 2], [3, 4]]));

    let composer = composer_for(temp_dir.path());
    let messages = composer.compose(&["puzzle".to_string()], &vars).unwrap();

    assert_eq!(messages.len(), 1);
    assert!(messages[0].content.contains("Puzzle identity:"));
    // Structured variables render as JSON.
    assert!(messages[0].content.contains("1"));
    assert!(messages[0].content.contains("4"));
}

#[test]
fn test_unresolved_placeholder_renders_empty() {
    let toml = r#"
role = "user"
content = "Existing rules: {{existing_rules}}."
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    write_template(temp_dir.path(), "rules.toml", toml);

    let composer = composer_for(temp_dir.path());
    let messages = composer
        .compose(&["rules".to_string()], &TemplateVars::new())
        .unwrap();

    assert_eq!(messages[0].content, "Existing rules: .");
}

#[test]
fn test_template_id_with_explicit_suffix_resolves() {
    let toml = r#"
role = "user"
content = "Suffix already present."
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    write_template(temp_dir.path(), "direct.toml", toml);

    let composer = composer_for(temp_dir.path());
    let messages = composer
        .compose(&["direct.toml".to_string()], &TemplateVars::new())
        .unwrap();

    assert_eq!(messages.len(), 1);
}
