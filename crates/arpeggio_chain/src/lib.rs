//! Chain execution engine for Arpeggio.
//!
//! A chain is a named, ordered sequence of steps loaded from a declarative
//! TOML file. The [`ChainExecutor`] runs each step's registered handler in
//! declaration order against one shared [`ChainContext`]; handlers compose
//! prompts from templates, call the generation backend, and fold their
//! results back into the context for downstream steps.
//!
//! # Example chain file
//!
//! ```toml
//! name = "solve_puzzle"
//! description = "Induce rules from training examples, then apply them"
//!
//! [[steps]]
//! name = "induce rules"
//! step_function = "generate_rules"
//! prompt_templates = ["induce_rules"]
//!
//! [[steps]]
//! name = "solve the test set"
//! step_function = "solve_puzzle_with_rules"
//! output_key = "test_results"
//! prompt_templates = ["apply_rules"]
//!
//! [[steps]]
//! name = "score the answers"
//! step_function = "evaluate_response"
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod definition;
mod executor;
mod problem;
mod processor;
mod registry;
mod steps;
mod toml_parser;

pub use context::ChainContext;
pub use definition::{ChainDefinition, StepSpec};
pub use executor::ChainExecutor;
pub use problem::{Example, Grid, ProblemSet, render_example, render_grid, render_input};
pub use processor::{LoggingProcessor, ProcessorContext, ProcessorRegistry, StepProcessor};
pub use registry::{StepHandler, StepRegistry, StepScope};
pub use steps::{
    EvaluateResponse, EvaluationRecord, GenerateRules, ProcessWithLlm, RuleSet,
    SolvePuzzleWithRules, TestResult,
};
