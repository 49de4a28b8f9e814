//! Template renderer trait.

use arpeggio_error::ArpeggioResult;

/// Variable mapping supplied to a template render.
///
/// Values are arbitrary JSON; the renderer decides how each value prints
/// into the template text.
pub type TemplateVars = serde_json::Map<String, serde_json::Value>;

/// A source of rendered template text.
///
/// Implementations resolve a template identifier, substitute variables into
/// the template body, and return the rendered text. Parsing the text into
/// messages is the composer's job, so renderers stay format-agnostic.
pub trait TemplateRenderer: Send + Sync {
    /// Render the template named `template_id` against `vars`.
    ///
    /// Fails with [`arpeggio_error::TemplateErrorKind::NotFound`] when the
    /// identifier does not resolve to a template.
    fn render(&self, template_id: &str, vars: &TemplateVars) -> ArpeggioResult<String>;
}
