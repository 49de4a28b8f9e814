//! Top-level error wrapper types.

use crate::{
    BackendError, BuilderError, ChainError, ConfigError, ResponseError, TemplateError,
};

/// Aggregate of every error domain in the workspace.
///
/// # Examples
///
/// ```
/// use arpeggio_error::{ArpeggioError, ResponseError};
///
/// let response_err = ResponseError::new("not valid JSON");
/// let err: ArpeggioError = response_err.into();
/// assert!(format!("{}", err).contains("Response Format Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ArpeggioErrorKind {
    /// Chain loading or execution error
    #[from(ChainError)]
    Chain(ChainError),
    /// Template resolution or format error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Backend response failed structured parsing
    #[from(ResponseError)]
    Response(ResponseError),
    /// Generation backend transport or API error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Arpeggio error with kind discrimination.
///
/// # Examples
///
/// ```
/// use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
///
/// fn might_fail() -> ArpeggioResult<()> {
///     Err(ChainError::new(ChainErrorKind::UnknownStepFunction("x".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Arpeggio Error: {}", _0)]
pub struct ArpeggioError(Box<ArpeggioErrorKind>);

impl ArpeggioError {
    /// Create a new error from a kind.
    pub fn new(kind: ArpeggioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ArpeggioErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ArpeggioErrorKind
impl<T> From<T> for ArpeggioError
where
    T: Into<ArpeggioErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Arpeggio operations.
///
/// # Examples
///
/// ```
/// use arpeggio_error::{ArpeggioResult, TemplateError, TemplateErrorKind};
///
/// fn render() -> ArpeggioResult<String> {
///     Err(TemplateError::new(TemplateErrorKind::NotFound("greet".into())))?
/// }
/// ```
pub type ArpeggioResult<T> = std::result::Result<T, ArpeggioError>;
