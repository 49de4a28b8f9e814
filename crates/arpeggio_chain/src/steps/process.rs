//! Generic direct-generation step.

use crate::registry::{StepHandler, StepScope};
use crate::steps::compose_and_generate;
use arpeggio_error::ArpeggioResult;
use async_trait::async_trait;
use serde_json::Value;

/// Composes the step's templates against the entire current context and
/// returns the generated text unchanged.
///
/// Every context key is available as a template variable, which makes this
/// the generic building block for chains that need one generation call per
/// step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWithLlm;

impl ProcessWithLlm {
    /// Registry identifier for this handler.
    pub const NAME: &'static str = "process_with_llm";
}

#[async_trait]
impl StepHandler for ProcessWithLlm {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn execute(&self, scope: StepScope<'_>) -> ArpeggioResult<Value> {
        let text = compose_and_generate(
            scope.composer,
            scope.driver,
            scope.step.prompt_templates(),
            scope.context.vars(),
        )
        .await?;
        Ok(Value::String(text))
    }
}
