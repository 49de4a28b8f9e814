//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! arpeggio binary.

mod check;
mod commands;
mod run;

pub use check::check_chain;
pub use commands::{Cli, Commands};
pub use run::run_chain;
