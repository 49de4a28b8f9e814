//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arpeggio - prompt chain orchestration for LLM workflows
#[derive(Parser, Debug)]
#[command(name = "arpeggio")]
#[command(about = "Run declarative prompt chains against LLM backends", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a chain from a TOML file
    Run {
        /// Path to the chain TOML file
        #[arg(long)]
        chain: PathBuf,

        /// Problem set JSON file, seeded into the context as `problem_set`
        #[arg(long)]
        problem_set: Option<PathBuf>,

        /// Directory of prompt template TOML files
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Model identifier, overriding the configured default
        #[arg(long)]
        model: Option<String>,
    },

    /// Validate a chain against the built-in step registry without running it
    Check {
        /// Path to the chain TOML file
        #[arg(long)]
        chain: PathBuf,
    },
}
