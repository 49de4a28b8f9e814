//! Step handler trait and the registry that resolves step functions.

use crate::{ChainContext, StepSpec};
use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
use arpeggio_interface::ArpeggioDriver;
use arpeggio_prompt::PromptComposer;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Everything a step handler may touch while executing one step.
///
/// The scope borrows from the executor for the duration of a single step.
/// Handlers read and write chain state through `context`; all other fields
/// are shared capabilities.
pub struct StepScope<'a> {
    /// The step being executed, including its prompt template ids
    pub step: &'a StepSpec,
    /// Mutable chain state shared across steps
    pub context: &'a mut ChainContext,
    /// Composer bound to the active template store
    pub composer: &'a PromptComposer,
    /// Text generation backend
    pub driver: &'a dyn ArpeggioDriver,
}

/// A named, executable unit of chain work.
///
/// Implementations are registered under [`StepHandler::name`] and resolved
/// by that identifier when a chain definition references them. The returned
/// value is stored in the chain context under the step's `output_key` when
/// one is configured, and discarded otherwise. Handlers that only mutate
/// the context through side effects return [`serde_json::Value::Null`].
#[async_trait]
pub trait StepHandler: Send + Sync {
    /// Identifier chains use to reference this handler.
    fn name(&self) -> &'static str;

    /// Executes one step against the given scope.
    async fn execute(&self, scope: StepScope<'_>) -> ArpeggioResult<serde_json::Value>;
}

/// Maps step function identifiers to their handlers.
///
/// Registration replaces: registering a handler under a name that is
/// already taken displaces the previous handler, which lets applications
/// override a built-in with their own implementation.
#[derive(Default)]
pub struct StepRegistry {
    handlers: HashMap<String, Arc<dyn StepHandler>>,
}

impl StepRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the built-in step handlers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::steps::register_builtins(&mut registry);
        registry
    }

    /// Registers a handler under its own name.
    ///
    /// Returns the displaced handler when the name was already registered.
    pub fn register(&mut self, handler: Arc<dyn StepHandler>) -> Option<Arc<dyn StepHandler>> {
        let name = handler.name();
        let displaced = self.handlers.insert(name.to_string(), handler);
        if displaced.is_some() {
            warn!(step_function = name, "replacing registered step handler");
        }
        displaced
    }

    /// Resolves a step function identifier to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`ChainErrorKind::UnknownStepFunction`] when no handler is
    /// registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn StepHandler>, ChainError> {
        self.handlers.get(name).cloned().ok_or_else(|| {
            ChainError::new(ChainErrorKind::UnknownStepFunction(name.to_string()))
        })
    }

    /// Returns true when a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered handler names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}
