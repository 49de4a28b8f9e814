//! Chain execution logic.
//!
//! This module provides the executor that drives a loaded chain definition,
//! resolving each step's handler and folding results back into the shared
//! context.

use crate::registry::StepScope;
use crate::{
    ChainContext, ChainDefinition, ProcessorContext, ProcessorRegistry, StepRegistry, StepSpec,
};
use arpeggio_error::{ArpeggioResult, ChainError};
use arpeggio_interface::{ArpeggioDriver, StepExecution};
use arpeggio_prompt::PromptComposer;
use std::path::Path;
use tracing::{debug, error, info};

/// Executes chains by running registered step handlers in sequence.
///
/// The executor owns the generation driver, the prompt composer, and the
/// step registry. Each run owns its context exclusively: steps run strictly
/// one at a time in declaration order, and every handler sees the context
/// writes of all handlers before it. Concurrent runs need one executor and
/// one context each.
///
/// Optionally, processors can be registered to observe each completed step
/// (logging, file writing, metrics); processor failures are logged and
/// never abort the run.
///
/// # Example
///
/// ```rust,ignore
/// use arpeggio_chain::{ChainContext, ChainExecutor};
/// use arpeggio_prompt::{FileTemplateStore, PromptComposer};
///
/// let store = FileTemplateStore::new("templates");
/// let composer = PromptComposer::new(Box::new(store));
/// let executor = ChainExecutor::new(driver, composer);
///
/// let definition = executor.load_file("chains/identity_check.toml")?;
/// let context = executor.run(&definition, seed).await?;
/// ```
pub struct ChainExecutor<D: ArpeggioDriver> {
    driver: D,
    composer: PromptComposer,
    registry: StepRegistry,
    processors: Option<ProcessorRegistry>,
    debug: bool,
}

impl<D: ArpeggioDriver> ChainExecutor<D> {
    /// Create a new executor with the given driver and prompt composer.
    ///
    /// The step registry starts with the built-in handlers registered.
    pub fn new(driver: D, composer: PromptComposer) -> Self {
        Self {
            driver,
            composer,
            registry: StepRegistry::with_builtins(),
            processors: None,
            debug: false,
        }
    }

    /// Replace the step registry.
    ///
    /// Use this to run with a custom handler set, including an empty one.
    pub fn with_registry(mut self, registry: StepRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Add step processors, invoked after each completed step.
    pub fn with_processors(mut self, processors: ProcessorRegistry) -> Self {
        self.processors = Some(processors);
        self
    }

    /// Enable per-step context dumps at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Get a reference to the underlying generation driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a reference to the step registry.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Get a mutable reference to the step registry, for registering
    /// application handlers after construction.
    pub fn registry_mut(&mut self) -> &mut StepRegistry {
        &mut self.registry
    }

    /// Load a chain definition from a TOML file and validate it against
    /// the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or any step references an unregistered step function.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<ChainDefinition, ChainError> {
        let definition = ChainDefinition::from_file(path)?;
        definition.validate(&self.registry)?;
        Ok(definition)
    }

    /// Parse a chain definition from TOML text and validate it against
    /// the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or any step references an
    /// unregistered step function.
    pub fn load_str(&self, source: &str) -> Result<ChainDefinition, ChainError> {
        let definition: ChainDefinition = source.parse()?;
        definition.validate(&self.registry)?;
        Ok(definition)
    }

    /// Execute a chain to completion, returning the final context.
    ///
    /// The seed context provides caller-supplied input variables; handlers
    /// and `output_key` writes accumulate on top of it. The run either
    /// completes every step or fails; on failure the partially written
    /// context is dropped with the error (use [`ChainExecutor::run_with`]
    /// to inspect partial state).
    ///
    /// # Errors
    ///
    /// Returns the first step failure. No step is retried and no later
    /// step runs after a failure.
    pub async fn run(
        &self,
        definition: &ChainDefinition,
        seed: ChainContext,
    ) -> ArpeggioResult<ChainContext> {
        let mut context = seed;
        self.run_with(definition, &mut context).await?;
        Ok(context)
    }

    /// Execute a chain against a caller-owned context.
    ///
    /// Behaves like [`ChainExecutor::run`], but mutates `context` in place
    /// so the caller can inspect writes from completed steps when a later
    /// step fails.
    ///
    /// # Errors
    ///
    /// Returns the first step failure. Context entries written by earlier
    /// steps remain in place; nothing is rolled back.
    #[tracing::instrument(skip_all, fields(chain = %definition.name(), steps = definition.steps().len()))]
    pub async fn run_with(
        &self,
        definition: &ChainDefinition,
        context: &mut ChainContext,
    ) -> ArpeggioResult<()> {
        if self.debug {
            debug!(context = ?context, "starting chain run");
        }

        for (sequence_number, step) in definition.steps().iter().enumerate() {
            self.execute_step(definition, step, sequence_number, context)
                .await?;

            if self.debug {
                debug!(step = %step.name(), context = ?context, "context after step");
            }
        }

        Ok(())
    }

    /// Resolve and run one step, store its output, notify processors.
    #[tracing::instrument(
        skip_all,
        fields(
            step = %step.name(),
            step_function = %step.step_function(),
            sequence = sequence_number
        )
    )]
    async fn execute_step(
        &self,
        definition: &ChainDefinition,
        step: &StepSpec,
        sequence_number: usize,
        context: &mut ChainContext,
    ) -> ArpeggioResult<()> {
        let handler = self.registry.resolve(step.step_function())?;
        info!("executing step");

        let scope = StepScope {
            step,
            context: &mut *context,
            composer: &self.composer,
            driver: &self.driver,
        };
        let result = handler.execute(scope).await?;

        if let Some(output_key) = step.output_key() {
            context.insert(output_key.clone(), result.clone());
        }

        let execution = StepExecution {
            step_name: step.name().clone(),
            step_function: step.step_function().clone(),
            output_key: step.output_key().clone(),
            result,
            sequence_number,
        };

        if let Some(processors) = &self.processors {
            let processor_context = ProcessorContext {
                execution: &execution,
                chain_name: definition.name(),
                context,
            };
            if let Err(e) = processors.process(&processor_context).await {
                error!(
                    step = %step.name(),
                    error = %e,
                    "Step processing failed, continuing execution"
                );
            }
        }

        Ok(())
    }
}
