//! Iterative rule induction over training examples.

use crate::registry::{StepHandler, StepScope};
use crate::steps::{compose_and_generate, parse_response};
use crate::{ProblemSet, render_example};
use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
use arpeggio_prompt::TemplateVars;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Accumulated transformation rules, as parsed from a generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Proposed rules in model order
    #[serde(default)]
    pub rules: Vec<String>,
    /// Free-form reasoning accompanying the rules
    #[serde(default)]
    pub explanation: String,
}

/// Induces rules one training example at a time.
///
/// For each example in order, the prompt combines a text rendering of the
/// input/output pair with the rules accumulated so far (`existing_rules`,
/// null on the first iteration). The parsed response replaces the
/// accumulated rules. After each example the handler writes a snapshot
/// under `rules_after_example_{i}` and updates `current_rules` to the
/// latest snapshot, so later steps can consult the final rule set or audit
/// how it evolved.
///
/// The handler's effect is entirely through those context keys; it returns
/// nothing of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateRules;

impl GenerateRules {
    /// Registry identifier for this handler.
    pub const NAME: &'static str = "generate_rules";
}

#[async_trait]
impl StepHandler for GenerateRules {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn execute(&self, scope: StepScope<'_>) -> ArpeggioResult<Value> {
        let problem_set: ProblemSet = scope.context.require("problem_set")?;
        let mut current_rules: Option<RuleSet> = None;

        for (idx, example) in problem_set.train.iter().enumerate() {
            let example_number = idx + 1;

            let existing_rules = match &current_rules {
                Some(rules) => to_snapshot(rules)?,
                None => Value::Null,
            };
            let mut vars = TemplateVars::new();
            vars.insert(
                "problem_set_representation".to_string(),
                Value::String(render_example(example)),
            );
            vars.insert("existing_rules".to_string(), existing_rules);

            debug!(example = example_number, "inducing rules");
            let text = compose_and_generate(
                scope.composer,
                scope.driver,
                scope.step.prompt_templates(),
                &vars,
            )
            .await?;
            let rules: RuleSet = parse_response(&text)?;

            let snapshot = to_snapshot(&rules)?;
            scope.context.insert(
                format!("rules_after_example_{example_number}"),
                snapshot.clone(),
            );
            scope.context.insert("current_rules", snapshot);
            current_rules = Some(rules);
        }

        Ok(Value::Null)
    }
}

fn to_snapshot(rules: &RuleSet) -> ArpeggioResult<Value> {
    serde_json::to_value(rules)
        .map_err(|e| ChainError::new(ChainErrorKind::Serialization(e.to_string())).into())
}
