//! Built-in step handlers.
//!
//! These encode the three-phase pattern the engine exists to support:
//! induce rules from training examples ([`GenerateRules`]), apply them to
//! held-out test examples ([`SolvePuzzleWithRules`]), and score the results
//! ([`EvaluateResponse`]). [`ProcessWithLlm`] is the generic single-call
//! building block for chains that need no iteration.

mod evaluate;
mod process;
mod rules;
mod solve;

pub use evaluate::{EvaluateResponse, EvaluationRecord};
pub use process::ProcessWithLlm;
pub use rules::{GenerateRules, RuleSet};
pub use solve::{SolvePuzzleWithRules, TestResult};

use crate::StepRegistry;
use arpeggio_core::{GenerateRequest, GenerateResponse, Output};
use arpeggio_error::{ArpeggioResult, ResponseError};
use arpeggio_interface::ArpeggioDriver;
use arpeggio_prompt::{PromptComposer, TemplateVars};
use std::sync::Arc;

/// Registers all built-in step handlers.
pub fn register_builtins(registry: &mut StepRegistry) {
    registry.register(Arc::new(ProcessWithLlm));
    registry.register(Arc::new(GenerateRules));
    registry.register(Arc::new(SolvePuzzleWithRules));
    registry.register(Arc::new(EvaluateResponse));
}

/// Composes the given templates against `vars` and runs one generation call.
pub(crate) async fn compose_and_generate(
    composer: &PromptComposer,
    driver: &dyn ArpeggioDriver,
    template_ids: &[String],
    vars: &TemplateVars,
) -> ArpeggioResult<String> {
    let messages = composer.compose(template_ids, vars)?;
    let request = GenerateRequest {
        messages,
        ..Default::default()
    };
    let response = driver.generate(&request).await?;
    Ok(response_text(&response))
}

/// Joins the text outputs of a response into one string.
pub(crate) fn response_text(response: &GenerateResponse) -> String {
    response
        .outputs
        .iter()
        .filter_map(|output| match output {
            Output::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses generated text as the JSON shape a handler expects.
pub(crate) fn parse_response<T: serde::de::DeserializeOwned>(text: &str) -> ArpeggioResult<T> {
    serde_json::from_str(text).map_err(|e| {
        ResponseError::new(format!("Failed to parse generation response as JSON: {e}")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joins_text_outputs() {
        let response = GenerateResponse {
            outputs: vec![
                Output::Text("first".to_string()),
                Output::Json(serde_json::json!({"skipped": true})),
                Output::Text("second".to_string()),
            ],
        };
        assert_eq!(response_text(&response), "first\nsecond");
    }

    #[test]
    fn test_parse_response_rejects_non_json() {
        let result: ArpeggioResult<serde_json::Value> = parse_response("not json at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_register_builtins_registers_all_handlers() {
        let mut registry = StepRegistry::new();
        register_builtins(&mut registry);
        assert_eq!(registry.len(), 4);
        assert!(registry.contains(ProcessWithLlm::NAME));
        assert!(registry.contains(GenerateRules::NAME));
        assert!(registry.contains(SolvePuzzleWithRules::NAME));
        assert!(registry.contains(EvaluateResponse::NAME));
    }
}
