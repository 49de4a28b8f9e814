//! Chain validation command handler.

use arpeggio::{ArpeggioResult, ChainDefinition, StepRegistry};
use std::path::Path;

/// Load a chain file and validate it against the built-in step registry,
/// printing the step plan without executing anything.
pub fn check_chain(chain: &Path) -> ArpeggioResult<()> {
    let registry = StepRegistry::with_builtins();
    let definition = ChainDefinition::from_file(chain)?;
    definition.validate(&registry)?;

    println!("Chain '{}' is valid", definition.name());
    if let Some(description) = definition.description() {
        println!("  {description}");
    }
    println!();

    for (number, step) in definition.steps().iter().enumerate() {
        println!(
            "  {}. {} ({})",
            number + 1,
            step.name(),
            step.step_function()
        );
        if let Some(output_key) = step.output_key() {
            println!("     writes: {output_key}");
        }
        if !step.prompt_templates().is_empty() {
            println!("     templates: {}", step.prompt_templates().join(", "));
        }
    }

    Ok(())
}
