//! Directory-backed template store.

use crate::{TemplateRenderer, TemplateVars};
use arpeggio_error::{ArpeggioResult, TemplateError, TemplateErrorKind};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// A [`TemplateRenderer`] backed by a directory of TOML template files.
///
/// `render("induce_rules", ...)` reads `<root>/induce_rules.toml`, replaces
/// each `{{placeholder}}` with the matching variable, and returns the text.
/// Placeholders may navigate nested values with dotted paths
/// (`{{problem_set.train}}`). String variables substitute verbatim; other
/// JSON values substitute as pretty-printed JSON; a placeholder that does
/// not resolve substitutes the empty string, so templates can mention
/// variables that only some steps provide.
///
/// # Examples
///
/// ```no_run
/// use arpeggio_prompt::{FileTemplateStore, TemplateRenderer, TemplateVars};
///
/// let store = FileTemplateStore::new("templates");
/// let mut vars = TemplateVars::new();
/// vars.insert("name".into(), serde_json::json!("puzzle 7"));
/// let text = store.render("greet", &vars)?;
/// # Ok::<(), arpeggio_error::ArpeggioError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    root: PathBuf,
}

impl FileTemplateStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the store reads templates from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn template_path(&self, template_id: &str) -> PathBuf {
        // Add .toml extension if not present
        let mut file_name = template_id.to_string();
        if !file_name.ends_with(".toml") {
            file_name.push_str(".toml");
        }
        self.root.join(file_name)
    }
}

impl TemplateRenderer for FileTemplateStore {
    fn render(&self, template_id: &str, vars: &TemplateVars) -> ArpeggioResult<String> {
        let path = self.template_path(template_id);
        let template = std::fs::read_to_string(&path).map_err(|e| {
            debug!(template = %template_id, path = %path.display(), error = %e, "template read failed");
            TemplateError::new(TemplateErrorKind::NotFound(template_id.to_string()))
        })?;

        let re = regex::Regex::new(r"\{\{([^}]+)\}\}").map_err(|e| {
            TemplateError::new(TemplateErrorKind::Render(format!(
                "invalid placeholder regex: {}",
                e
            )))
        })?;

        let mut rendered = template.clone();
        for cap in re.captures_iter(&template) {
            let placeholder = &cap[0];
            let reference = cap[1].trim();
            let replacement = resolve_reference(vars, reference)?;
            if replacement.is_empty() {
                debug!(template = %template_id, placeholder = %reference, "unresolved placeholder");
            }
            rendered = rendered.replace(placeholder, &replacement);
        }

        Ok(rendered)
    }
}

/// Navigate a dotted reference through the variable mapping.
fn resolve_reference(vars: &TemplateVars, reference: &str) -> ArpeggioResult<String> {
    let mut segments = reference.split('.');
    let first = match segments.next() {
        Some(s) => s,
        None => return Ok(String::new()),
    };

    let mut current = match vars.get(first) {
        Some(value) => value,
        None => return Ok(String::new()),
    };
    for segment in segments {
        current = match current.get(segment) {
            Some(value) => value,
            None => return Ok(String::new()),
        };
    }

    match current {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => serde_json::to_string_pretty(other).map_err(|e| {
            TemplateError::new(TemplateErrorKind::Render(format!(
                "failed to serialize value for '{}': {}",
                reference, e
            )))
            .into()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_reference;
    use serde_json::json;

    fn vars() -> super::TemplateVars {
        let mut vars = super::TemplateVars::new();
        vars.insert("name".into(), json!("ringo"));
        vars.insert("count".into(), json!(3));
        vars.insert("nested".into(), json!({"inner": {"leaf": "deep"}}));
        vars.insert("grid".into(), json!([[1, 2], [3, 4]]));
        vars
    }

    #[test]
    fn strings_substitute_verbatim() {
        assert_eq!(resolve_reference(&vars(), "name").unwrap(), "ringo");
    }

    #[test]
    fn numbers_render_plainly() {
        assert_eq!(resolve_reference(&vars(), "count").unwrap(), "3");
    }

    #[test]
    fn dotted_paths_navigate_nested_values() {
        assert_eq!(
            resolve_reference(&vars(), "nested.inner.leaf").unwrap(),
            "deep"
        );
    }

    #[test]
    fn structured_values_render_as_pretty_json() {
        let rendered = resolve_reference(&vars(), "grid").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!([[1, 2], [3, 4]]));
    }

    #[test]
    fn missing_references_render_empty() {
        assert_eq!(resolve_reference(&vars(), "absent").unwrap(), "");
        assert_eq!(resolve_reference(&vars(), "nested.absent").unwrap(), "");
    }
}
