//! Step processing traits and registry.
//!
//! Processors are invoked after each step completes to observe its result
//! and perform side effects (logging, file writing, metrics). Processor
//! failures are reported to the executor but never abort the run.

use crate::ChainContext;
use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
use arpeggio_interface::StepExecution;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Context provided to processors after a step completes.
///
/// Carries the step's execution record plus a read-only view of the chain
/// state as it stands after the step's writes.
#[derive(Debug, Clone)]
pub struct ProcessorContext<'a> {
    /// The step execution record
    pub execution: &'a StepExecution,

    /// Name of the chain being executed
    pub chain_name: &'a str,

    /// Chain state after the step's context writes
    pub context: &'a ChainContext,
}

/// Trait for observing step execution results.
///
/// Processors receive a [`ProcessorContext`] containing the step's
/// execution record and the chain state after the step ran. They are
/// routed through [`ProcessorRegistry::process`], which consults
/// `should_process` before invoking each one.
#[async_trait]
pub trait StepProcessor: Send + Sync {
    /// Process a completed step.
    ///
    /// # Errors
    ///
    /// Returns an error if processing fails. Processor errors are logged
    /// by the executor and do not fail the chain run.
    async fn process(&self, context: &ProcessorContext<'_>) -> ArpeggioResult<()>;

    /// Check whether this processor should handle the given step.
    ///
    /// Implementations can inspect the step name, step function, or result
    /// to decide whether they apply.
    fn should_process(&self, context: &ProcessorContext<'_>) -> bool;

    /// Human-readable name, used for logging and error messages.
    fn name(&self) -> &str;
}

/// Registry of step processors with routing.
///
/// Routes each completed step to every registered processor whose
/// `should_process` accepts it, in registration order.
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn StepProcessor>>,
}

impl ProcessorRegistry {
    /// Create a new empty processor registry.
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Register a new processor.
    ///
    /// Processors are invoked in registration order. If multiple processors
    /// match a step, all matching processors are called.
    pub fn register(&mut self, processor: Box<dyn StepProcessor>) {
        self.processors.push(processor);
    }

    /// Process a step execution with all matching processors.
    ///
    /// Continues through the remaining processors when one fails,
    /// collecting every error.
    ///
    /// # Errors
    ///
    /// Returns an error naming each failed processor when at least one
    /// processor fails.
    pub async fn process(&self, context: &ProcessorContext<'_>) -> ArpeggioResult<()> {
        let mut errors = Vec::new();

        for processor in &self.processors {
            if processor.should_process(context) {
                if let Err(e) = processor.process(context).await {
                    warn!(
                        processor = processor.name(),
                        step = %context.execution.step_name,
                        error = %e,
                        "Processor failed"
                    );
                    errors.push(format!("{}: {}", processor.name(), e));
                } else {
                    debug!(
                        processor = processor.name(),
                        step = %context.execution.step_name,
                        "Processor succeeded"
                    );
                }
            }
        }

        if !errors.is_empty() {
            return Err(
                ChainError::new(ChainErrorKind::Processor(errors.join("; "))).into(),
            );
        }

        Ok(())
    }

    /// Get the number of registered processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.processors.iter().map(|p| p.name()).collect();
        f.debug_struct("ProcessorRegistry")
            .field("processors", &names)
            .finish()
    }
}

/// Processor that logs every completed step at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProcessor;

#[async_trait]
impl StepProcessor for LoggingProcessor {
    async fn process(&self, context: &ProcessorContext<'_>) -> ArpeggioResult<()> {
        info!(
            chain = context.chain_name,
            step = %context.execution.step_name,
            step_function = %context.execution.step_function,
            output_key = ?context.execution.output_key,
            context_keys = context.context.len(),
            "Step completed"
        );
        Ok(())
    }

    fn should_process(&self, _context: &ProcessorContext<'_>) -> bool {
        true
    }

    fn name(&self) -> &str {
        "LoggingProcessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpeggio_error::BackendError;

    struct TestProcessor {
        name: String,
        should_process: bool,
        fail: bool,
    }

    #[async_trait]
    impl StepProcessor for TestProcessor {
        async fn process(&self, _context: &ProcessorContext<'_>) -> ArpeggioResult<()> {
            if self.fail {
                Err(BackendError::new(arpeggio_error::BackendErrorKind::Http(
                    "test error".to_string(),
                ))
                .into())
            } else {
                Ok(())
            }
        }

        fn should_process(&self, _context: &ProcessorContext<'_>) -> bool {
            self.should_process
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn create_test_execution(step_name: &str) -> StepExecution {
        StepExecution {
            step_name: step_name.to_string(),
            step_function: "process_with_llm".to_string(),
            output_key: Some("result".to_string()),
            result: serde_json::Value::String("generated".to_string()),
            sequence_number: 0,
        }
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let registry = ProcessorRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());

        let execution = create_test_execution("test");
        let context = ChainContext::new();
        let processor_context = ProcessorContext {
            execution: &execution,
            chain_name: "test_chain",
            context: &context,
        };
        registry.process(&processor_context).await.unwrap();
    }

    #[tokio::test]
    async fn test_should_process_filtering() {
        let mut registry = ProcessorRegistry::new();
        registry.register(Box::new(TestProcessor {
            name: "ShouldRun".to_string(),
            should_process: true,
            fail: false,
        }));
        registry.register(Box::new(TestProcessor {
            name: "WouldFailButFiltered".to_string(),
            should_process: false,
            fail: true,
        }));

        let execution = create_test_execution("test");
        let context = ChainContext::new();
        let processor_context = ProcessorContext {
            execution: &execution,
            chain_name: "test_chain",
            context: &context,
        };
        registry.process(&processor_context).await.unwrap();
    }

    #[tokio::test]
    async fn test_partial_failure_collects_all_errors() {
        let mut registry = ProcessorRegistry::new();
        registry.register(Box::new(TestProcessor {
            name: "Success".to_string(),
            should_process: true,
            fail: false,
        }));
        registry.register(Box::new(TestProcessor {
            name: "Failure1".to_string(),
            should_process: true,
            fail: true,
        }));
        registry.register(Box::new(TestProcessor {
            name: "Failure2".to_string(),
            should_process: true,
            fail: true,
        }));

        let execution = create_test_execution("test");
        let context = ChainContext::new();
        let processor_context = ProcessorContext {
            execution: &execution,
            chain_name: "test_chain",
            context: &context,
        };
        let result = registry.process(&processor_context).await;
        assert!(result.is_err());

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failure1"));
        assert!(err_msg.contains("Failure2"));
        assert!(!err_msg.contains("Success:"));
    }

    #[tokio::test]
    async fn test_logging_processor_accepts_everything() {
        let execution = create_test_execution("any step");
        let context = ChainContext::new();
        let processor_context = ProcessorContext {
            execution: &execution,
            chain_name: "test_chain",
            context: &context,
        };
        let processor = LoggingProcessor;
        assert!(processor.should_process(&processor_context));
        processor.process(&processor_context).await.unwrap();
    }
}
