//! Rule application against held-out test examples.

use crate::registry::{StepHandler, StepScope};
use crate::steps::{compose_and_generate, parse_response};
use crate::{Grid, ProblemSet, render_input};
use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
use arpeggio_prompt::TemplateVars;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Parsed generation response for one test example.
#[derive(Debug, Clone, Deserialize)]
struct SolveResponse {
    #[serde(default = "empty_grid")]
    output_grid: Value,
    #[serde(default)]
    explanation: String,
}

fn empty_grid() -> Value {
    Value::Array(Vec::new())
}

/// Result record for one solved test example.
///
/// `output_grid` carries whatever JSON the model produced, grid-shaped or
/// not; evaluation treats any shape mismatch as a failed match rather than
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// The test input grid
    pub test_input: Grid,
    /// The model's output, in whatever shape it returned
    #[serde(default)]
    pub output_grid: Value,
    /// Free-form reasoning accompanying the output
    #[serde(default)]
    pub explanation: String,
}

/// Applies the current rules to each test example in order.
///
/// The prompt for each example combines a rendering of the test input
/// (expected output withheld) with the `current_rules` context value.
/// Result records accumulate in order and land both in the `test_results`
/// context key and in the handler's return value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolvePuzzleWithRules;

impl SolvePuzzleWithRules {
    /// Registry identifier for this handler.
    pub const NAME: &'static str = "solve_puzzle_with_rules";
}

#[async_trait]
impl StepHandler for SolvePuzzleWithRules {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn execute(&self, scope: StepScope<'_>) -> ArpeggioResult<Value> {
        let problem_set: ProblemSet = scope.context.require("problem_set")?;
        let current_rules = scope
            .context
            .get("current_rules")
            .cloned()
            .unwrap_or(Value::Null);

        let mut test_results = Vec::new();
        for (idx, example) in problem_set.test.iter().enumerate() {
            let test_number = idx + 1;

            let mut vars = TemplateVars::new();
            vars.insert(
                "test_input_representation".to_string(),
                Value::String(render_input(&example.input)),
            );
            vars.insert("current_rules".to_string(), current_rules.clone());

            debug!(test = test_number, "solving test example");
            let text = compose_and_generate(
                scope.composer,
                scope.driver,
                scope.step.prompt_templates(),
                &vars,
            )
            .await?;
            let solution: SolveResponse = parse_response(&text)?;

            test_results.push(TestResult {
                test_input: example.input.clone(),
                output_grid: solution.output_grid,
                explanation: solution.explanation,
            });
        }

        let results = serde_json::to_value(&test_results)
            .map_err(|e| ChainError::new(ChainErrorKind::Serialization(e.to_string())))?;
        scope.context.insert("test_results", results.clone());
        Ok(results)
    }
}
