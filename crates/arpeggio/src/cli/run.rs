//! Chain execution command handler.

use arpeggio::{
    AnthropicClient, ArpeggioConfig, ArpeggioResult, BackendError, BackendErrorKind, ChainContext,
    ChainError, ChainErrorKind, ChainExecutor, FileTemplateStore, LoggingProcessor, ProblemSet,
    ProcessorRegistry, PromptComposer,
};
use std::path::Path;

/// Execute a chain from a TOML file.
///
/// Builds the Anthropic backend from `ANTHROPIC_API_KEY` and the layered
/// configuration, seeds the context with the problem set when one is given,
/// runs the chain, and prints the result as pretty JSON: the
/// `evaluation_results` entry when the chain produced one, the whole final
/// context otherwise.
///
/// # Arguments
///
/// * `chain` - Path to the chain TOML file
/// * `problem_set` - Optional problem set JSON file, seeded as `problem_set`
/// * `templates` - Optional template directory, overriding the configuration
/// * `model` - Optional model identifier, overriding the configuration
pub async fn run_chain(
    chain: &Path,
    problem_set: Option<&Path>,
    templates: Option<&Path>,
    model: Option<&str>,
) -> ArpeggioResult<()> {
    let config = ArpeggioConfig::load()?;

    let api_key = std::env::var("ANTHROPIC_API_KEY")
        .map_err(|_| BackendError::new(BackendErrorKind::MissingApiKey))?;
    let model = model.unwrap_or(&config.generation.model);
    let client = AnthropicClient::new(api_key, model)
        .with_max_tokens(config.generation.max_tokens)
        .with_temperature(config.generation.temperature);

    let template_dir = templates.unwrap_or(config.prompts.template_dir.as_path());
    let store = FileTemplateStore::new(template_dir);
    let composer = PromptComposer::new(Box::new(store));

    let mut processors = ProcessorRegistry::new();
    processors.register(Box::new(LoggingProcessor));
    let executor = ChainExecutor::new(client, composer).with_processors(processors);

    tracing::info!(path = %chain.display(), "Loading chain");
    let definition = executor.load_file(chain)?;
    tracing::info!(
        name = %definition.name(),
        steps = definition.steps().len(),
        model,
        templates = %template_dir.display(),
        "Chain loaded"
    );

    let mut seed = ChainContext::new();
    if let Some(path) = problem_set {
        let problems = ProblemSet::from_file(path)?;
        tracing::info!(
            path = %path.display(),
            train = problems.train.len(),
            test = problems.test.len(),
            "Problem set loaded"
        );
        let value = serde_json::to_value(&problems)
            .map_err(|e| ChainError::new(ChainErrorKind::Serialization(e.to_string())))?;
        seed.insert("problem_set", value);
    }

    let context = executor.run(&definition, seed).await?;

    let rendered = match context.get("evaluation_results") {
        Some(results) => serde_json::to_string_pretty(results),
        None => serde_json::to_string_pretty(context.vars()),
    }
    .map_err(|e| ChainError::new(ChainErrorKind::Serialization(e.to_string())))?;

    println!("{rendered}");

    Ok(())
}
