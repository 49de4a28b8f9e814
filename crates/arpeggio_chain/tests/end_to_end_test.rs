//! End-to-end run of the three-phase chain against a scripted backend.

mod test_utils;

use arpeggio_chain::{ChainContext, ChainExecutor, LoggingProcessor, ProcessorRegistry};
use arpeggio_prompt::{FileTemplateStore, PromptComposer};
use serde_json::json;
use test_utils::{MockDriver, write_template};

const CHAIN: &str = r#"
name = "identity_check"
description = "Induce rules from one example, apply them, score the result"

[[steps]]
name = "induce rules"
step_function = "generate_rules"
prompt_templates = ["induce_rules"]

[[steps]]
name = "apply rules"
step_function = "solve_puzzle_with_rules"
output_key = "solutions"
prompt_templates = ["solve_with_rules"]

[[steps]]
name = "score"
step_function = "evaluate_response"
"#;

#[tokio::test]
async fn test_identity_transform_scores_a_match() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_template(
        dir.path(),
        "induce_rules",
        r#"
role = "user"
content = '''
{{problem_set_representation}}

Rules so far:
{{existing_rules}}
'''
"#,
    );
    write_template(
        dir.path(),
        "solve_with_rules",
        r#"
role = "user"
content = '''
Rules:
{{current_rules}}

{{test_input_representation}}
'''
"#,
    );

    let driver = MockDriver::new(&[
        r#"{"rules": ["copy input to output"], "explanation": "every example maps to itself"}"#,
        r#"{"output_grid": [[4, 5], [6, 7]], "explanation": "applied the copy rule"}"#,
    ]);
    let store = FileTemplateStore::new(dir.path());
    let composer = PromptComposer::new(Box::new(store));
    let mut processors = ProcessorRegistry::new();
    processors.register(Box::new(LoggingProcessor));
    let executor = ChainExecutor::new(driver, composer).with_processors(processors);

    let definition = executor.load_str(CHAIN)?;
    assert_eq!(definition.steps().len(), 3);

    let mut seed = ChainContext::new();
    seed.insert(
        "problem_set",
        json!({
            "train": [{"input": [[1, 2], [3, 0]], "output": [[1, 2], [3, 0]]}],
            "test": [{"input": [[4, 5], [6, 7]], "output": [[4, 5], [6, 7]]}]
        }),
    );
    let context = executor.run(&definition, seed).await?;

    // One generation call per train example, one per test example.
    assert_eq!(executor.driver().call_count(), 2);

    let rules = json!({
        "rules": ["copy input to output"],
        "explanation": "every example maps to itself"
    });
    assert_eq!(context.get("rules_after_example_1"), Some(&rules));
    assert_eq!(context.get("current_rules"), Some(&rules));

    let results = json!([{
        "test_input": [[4, 5], [6, 7]],
        "output_grid": [[4, 5], [6, 7]],
        "explanation": "applied the copy rule"
    }]);
    assert_eq!(context.get("test_results"), Some(&results));
    assert_eq!(context.get("solutions"), Some(&results));

    assert_eq!(
        context.get("evaluation_results"),
        Some(&json!([{
            "test_index": 1,
            "match": true,
            "test_input": [[4, 5], [6, 7]],
            "generated_output": [[4, 5], [6, 7]],
            "correct_output": [[4, 5], [6, 7]],
            "explanation": "applied the copy rule"
        }]))
    );

    // The solve prompt saw the induced rules and the bare test input.
    let solve_prompt = executor.driver().request_text(1);
    assert!(solve_prompt.contains("copy input to output"));
    assert!(solve_prompt.contains("Input:\n4 5\n6 7"));
    assert!(!solve_prompt.contains("Output:"));
    Ok(())
}

#[tokio::test]
async fn test_mismatched_solution_scores_no_match() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_template(
        dir.path(),
        "induce_rules",
        r#"
role = "user"
content = '''
{{problem_set_representation}}
{{existing_rules}}
'''
"#,
    );
    write_template(
        dir.path(),
        "solve_with_rules",
        r#"
role = "user"
content = '''
{{current_rules}}
{{test_input_representation}}
'''
"#,
    );

    let driver = MockDriver::new(&[
        r#"{"rules": ["copy input to output"], "explanation": ""}"#,
        r#"{"output_grid": [[0]], "explanation": "wrong guess"}"#,
    ]);
    let store = FileTemplateStore::new(dir.path());
    let composer = PromptComposer::new(Box::new(store));
    let executor = ChainExecutor::new(driver, composer);

    let definition = executor.load_str(CHAIN)?;
    let mut seed = ChainContext::new();
    seed.insert(
        "problem_set",
        json!({
            "train": [{"input": [[1]], "output": [[1]]}],
            "test": [{"input": [[9]], "output": [[9]]}]
        }),
    );
    let context = executor.run(&definition, seed).await?;

    let records = context
        .get("evaluation_results")
        .and_then(|v| v.as_array())
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["match"], json!(false));
    assert_eq!(records[0]["generated_output"], json!([[0]]));
    assert_eq!(records[0]["correct_output"], json!([[9]]));
    Ok(())
}
