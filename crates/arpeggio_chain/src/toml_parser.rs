//! TOML deserialization structures for chain configuration.
//!
//! This module provides intermediate structures for deserializing chain
//! files into domain types ([`crate::ChainDefinition`], [`crate::StepSpec`]).

use serde::Deserialize;

/// Intermediate structure for a whole chain file.
///
/// The top level of a chain file is a plain mapping: `name`, an optional
/// `description`, and a required (possibly empty) `steps` array.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlChain {
    pub name: String,
    pub description: Option<String>,
    pub steps: Vec<TomlStep>,
}

/// Intermediate structure for one `[[steps]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlStep {
    pub name: String,
    pub step_function: String,
    pub output_key: Option<String>,
    /// Template identifiers handed opaquely to the step handler
    #[serde(default)]
    pub prompt_templates: Vec<String>,
}
