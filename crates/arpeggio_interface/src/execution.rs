//! Step execution records.
//!
//! These records are produced by the chain executor after each step and
//! handed to registered step processors for observation.

use serde::{Deserialize, Serialize};

/// Execution record for a single step in a chain run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepExecution {
    /// Name of the step (from the chain definition).
    pub step_name: String,

    /// Registered step function the step resolved to.
    pub step_function: String,

    /// Context key the result was stored under, if the step declared one.
    pub output_key: Option<String>,

    /// The handler's return value (JSON null when the handler returns nothing).
    pub result: serde_json::Value,

    /// Position in the execution sequence (0-indexed).
    pub sequence_number: usize,
}
