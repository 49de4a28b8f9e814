//! Core data structures for chains.

use crate::{StepRegistry, toml_parser};
use arpeggio_error::{ChainError, ChainErrorKind};
use std::path::Path;
use std::str::FromStr;

/// One step of a chain: a registered handler plus its configuration.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, derive_getters::Getters,
)]
pub struct StepSpec {
    /// Human-readable label, used only for diagnostics
    name: String,
    /// Identifier that must resolve in the step registry
    step_function: String,
    /// Context key the step's return value is stored under, if any
    output_key: Option<String>,
    /// Ordered template identifiers passed opaquely to the handler
    prompt_templates: Vec<String>,
}

/// Complete chain structure parsed from TOML.
///
/// A chain definition is parsed once at load time and immutable thereafter.
/// Step order is execution order; no reordering or dependency resolution is
/// performed.
///
/// # Example TOML Structure
///
/// ```toml
/// name = "identity_check"
/// description = "Induce, apply, and score"
///
/// [[steps]]
/// name = "induce rules"
/// step_function = "generate_rules"
/// prompt_templates = ["induce_rules"]
///
/// [[steps]]
/// name = "score"
/// step_function = "evaluate_response"
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, derive_getters::Getters,
)]
pub struct ChainDefinition {
    /// Chain identifier, informational only
    name: String,
    /// Optional human-readable description
    description: Option<String>,
    /// Steps in execution order
    steps: Vec<StepSpec>,
}

impl ChainDefinition {
    /// Loads a chain definition from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is invalid.
    /// Parsing is all-or-nothing: one malformed step entry invalidates the
    /// whole load.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChainError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ChainError::new(ChainErrorKind::Read(e.to_string())))?;
        content.parse()
    }

    /// Validates that every step's `step_function` resolves in `registry`.
    ///
    /// Called eagerly at load time so a malformed chain never starts
    /// partial execution.
    ///
    /// # Errors
    ///
    /// Returns [`ChainErrorKind::UnknownStepFunction`] naming the first
    /// unresolvable step function.
    #[tracing::instrument(skip_all, fields(chain = %self.name, steps = self.steps.len()))]
    pub fn validate(&self, registry: &StepRegistry) -> Result<(), ChainError> {
        for step in &self.steps {
            if !registry.contains(&step.step_function) {
                return Err(ChainError::new(ChainErrorKind::UnknownStepFunction(
                    step.step_function.clone(),
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for ChainDefinition {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let toml_chain: toml_parser::TomlChain = toml::from_str(s)
            .map_err(|e| ChainError::new(ChainErrorKind::Parse(e.to_string())))?;

        let steps = toml_chain
            .steps
            .into_iter()
            .map(|step| StepSpec {
                name: step.name,
                step_function: step.step_function,
                output_key: step.output_key,
                prompt_templates: step.prompt_templates,
            })
            .collect();

        Ok(ChainDefinition {
            name: toml_chain.name,
            description: toml_chain.description,
            steps,
        })
    }
}
