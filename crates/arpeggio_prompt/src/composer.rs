//! Prompt composition from rendered templates.

use crate::{TemplateRenderer, TemplateVars};
use arpeggio_core::{Message, Role};
use arpeggio_error::{ArpeggioResult, TemplateError, TemplateErrorKind};
use serde::Deserialize;
use tracing::debug;

/// Intermediate structure for one rendered role/content record.
#[derive(Debug, Clone, Deserialize)]
struct TomlPromptEntry {
    role: Role,
    content: String,
}

/// Shapes a rendered template may take.
///
/// Either a single record (top-level `role`/`content` keys) or a multi-turn
/// exchange (`[[message]]` array of tables). Anything else is a format error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlPrompt {
    Single(TomlPromptEntry),
    Exchange { message: Vec<TomlPromptEntry> },
}

/// Composes ordered message lists from named templates.
///
/// For each template identifier, in order: render it against the variable
/// mapping, parse the rendered text, and append its messages. A template
/// contributing a multi-turn exchange composes cleanly with single-record
/// templates in the same step; template order and within-template order are
/// both preserved.
pub struct PromptComposer {
    renderer: Box<dyn TemplateRenderer>,
}

impl PromptComposer {
    /// Create a composer over a template renderer.
    pub fn new(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Render each template in order and flatten the results into one
    /// ordered message list.
    pub fn compose(
        &self,
        template_ids: &[String],
        vars: &TemplateVars,
    ) -> ArpeggioResult<Vec<Message>> {
        let mut messages = Vec::new();
        for template_id in template_ids {
            let rendered = self.renderer.render(template_id, vars)?;
            let parsed = parse_messages(template_id, &rendered)?;
            debug!(template = %template_id, count = parsed.len(), "composed template");
            messages.extend(parsed);
        }
        Ok(messages)
    }
}

impl std::fmt::Debug for PromptComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptComposer").finish_non_exhaustive()
    }
}

/// Parse rendered template text as one record or a `[[message]]` list.
fn parse_messages(template_id: &str, rendered: &str) -> ArpeggioResult<Vec<Message>> {
    let parsed: TomlPrompt = toml::from_str(rendered).map_err(|e| {
        TemplateError::new(TemplateErrorKind::Format {
            template: template_id.to_string(),
            message: e.to_string(),
        })
    })?;

    let entries = match parsed {
        TomlPrompt::Single(entry) => vec![entry],
        TomlPrompt::Exchange { message } => message,
    };

    Ok(entries
        .into_iter()
        .map(|entry| Message {
            role: entry.role,
            content: entry.content,
        })
        .collect())
}
