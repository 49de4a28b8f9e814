//! Scoring of generated outputs against ground truth.

use crate::registry::{StepHandler, StepScope};
use crate::steps::TestResult;
use crate::{Grid, ProblemSet};
use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Per-example verdict produced by evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Position of the test example, starting at 1
    pub test_index: usize,
    /// Whether the generated output equals the expected output exactly
    #[serde(rename = "match")]
    pub is_match: bool,
    /// The test input grid
    pub test_input: Grid,
    /// The model's output, in whatever shape it returned
    pub generated_output: Value,
    /// Ground-truth output grid
    pub correct_output: Grid,
    /// Explanation carried over from the solve step
    pub explanation: String,
}

/// Compares each recorded test result against its ground-truth output.
///
/// Results and test examples pair up by position. Equality is strict deep
/// equality over the structured output: same shape, same values, same
/// ordering. A generated output of the wrong shape, or missing entirely,
/// scores as a failed match, never as an error. Verdicts land in the
/// `evaluation_results` context key; the handler returns nothing of its
/// own. Makes no generation calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateResponse;

impl EvaluateResponse {
    /// Registry identifier for this handler.
    pub const NAME: &'static str = "evaluate_response";
}

#[async_trait]
impl StepHandler for EvaluateResponse {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn execute(&self, scope: StepScope<'_>) -> ArpeggioResult<Value> {
        let problem_set: ProblemSet = scope.context.require("problem_set")?;
        let test_results: Vec<TestResult> = scope.context.require("test_results")?;

        let mut evaluation_results = Vec::new();
        for (idx, (result, example)) in test_results
            .iter()
            .zip(problem_set.test.iter())
            .enumerate()
        {
            let test_index = idx + 1;
            let expected = serde_json::to_value(&example.output)
                .map_err(|e| ChainError::new(ChainErrorKind::Serialization(e.to_string())))?;
            let is_match = result.output_grid == expected;

            debug!(test = test_index, matched = is_match, "scored test example");
            evaluation_results.push(EvaluationRecord {
                test_index,
                is_match,
                test_input: result.test_input.clone(),
                generated_output: result.output_grid.clone(),
                correct_output: example.output.clone(),
                explanation: result.explanation.clone(),
            });
        }

        let records = serde_json::to_value(&evaluation_results)
            .map_err(|e| ChainError::new(ChainErrorKind::Serialization(e.to_string())))?;
        scope.context.insert("evaluation_results", records);
        Ok(Value::Null)
    }
}
