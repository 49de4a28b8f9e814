//! Arpeggio - Prompt Chain Orchestration
//!
//! Arpeggio runs declarative prompt chains against LLM backends. A chain is
//! a TOML file naming an ordered sequence of steps; each step invokes a
//! registered handler that composes prompts from templates, calls the
//! generation backend, and folds its results into a shared context for the
//! steps after it.
//!
//! # Features
//!
//! - **Declarative Chains**: TOML chain files parsed into immutable
//!   definitions, validated against the handler registry before execution
//! - **Pluggable Steps**: a `StepHandler` trait plus a registry; built-in
//!   handlers cover generic generation, rule induction, puzzle solving, and
//!   evaluation
//! - **Template Composition**: directory-backed TOML templates with
//!   `{{placeholder}}` substitution, flattened into ordered message lists
//! - **Unified Backend Trait**: a single `ArpeggioDriver` trait; the
//!   Anthropic Messages API ships as the built-in implementation
//! - **Step Processors**: observe each completed step for logging or side
//!   effects without affecting the run
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use arpeggio::{
//!     AnthropicClient, ChainContext, ChainExecutor, FileTemplateStore, PromptComposer,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnthropicClient::from_env()?;
//!     let store = FileTemplateStore::new("templates");
//!     let composer = PromptComposer::new(Box::new(store));
//!     let executor = ChainExecutor::new(client, composer);
//!
//!     let definition = executor.load_file("chains/solve_puzzle.toml")?;
//!     let context = executor.run(&definition, ChainContext::new()).await?;
//!     println!("{:?}", context.get("evaluation_results"));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Arpeggio is organized as a workspace with focused crates:
//!
//! - `arpeggio_error` - Error types
//! - `arpeggio_core` - Core data types (Role, Message, GenerateRequest, ...)
//! - `arpeggio_interface` - ArpeggioDriver trait and execution records
//! - `arpeggio_prompt` - Template rendering and prompt composition
//! - `arpeggio_chain` - Chain definitions, step handlers, and the executor
//! - `arpeggio_models` - LLM provider implementations
//!
//! This crate (`arpeggio`) re-exports everything for convenience and ships
//! the `arpeggio` CLI binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use arpeggio_chain::*;
pub use arpeggio_core::*;
pub use arpeggio_error::*;
pub use arpeggio_interface::*;
pub use arpeggio_models::*;
pub use arpeggio_prompt::*;

mod config;

pub use config::{ArpeggioConfig, GenerationConfig, PromptConfig};
