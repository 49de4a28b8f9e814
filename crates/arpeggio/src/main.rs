//! Arpeggio CLI binary.
//!
//! This binary provides command-line access to Arpeggio's functionality:
//! - Execute prompt chains from TOML files
//! - Validate chains against the built-in step registry

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    use cli::{Cli, Commands, check_chain, run_chain};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    let result = match cli.command {
        Commands::Run {
            chain,
            problem_set,
            templates,
            model,
        } => {
            run_chain(
                &chain,
                problem_set.as_deref(),
                templates.as_deref(),
                model.as_deref(),
            )
            .await
        }

        Commands::Check { chain } => check_chain(&chain),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
