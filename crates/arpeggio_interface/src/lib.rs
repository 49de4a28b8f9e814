//! Trait definitions for the Arpeggio prompt-chaining library.
//!
//! This crate provides the generation backend trait and the execution record
//! types shared between the chain engine and its observers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod execution;
mod traits;

pub use execution::StepExecution;
pub use traits::ArpeggioDriver;
