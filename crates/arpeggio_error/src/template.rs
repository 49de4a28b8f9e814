//! Prompt template error types.

/// Specific error conditions for template resolution and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Template identifier did not resolve to a readable template
    #[display("Template '{}' not found", _0)]
    NotFound(String),
    /// Rendered template was not a role/content record or a list of them
    #[display("Template '{}' did not produce valid messages: {}", template, message)]
    Format {
        /// Template identifier
        template: String,
        /// What went wrong
        message: String,
    },
    /// Substitution itself failed
    #[display("Template rendering failed: {}", _0)]
    Render(String),
}

/// Error type for template operations.
///
/// # Examples
///
/// ```
/// use arpeggio_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::NotFound("intro".into()));
/// assert!(format!("{}", err).contains("intro"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
