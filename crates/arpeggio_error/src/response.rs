//! Backend response format error types.

/// Raised when a generation backend's text cannot be parsed as the
/// structured shape a step handler expects.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Response Format Error: {} at line {} in {}", message, line, file)]
pub struct ResponseError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ResponseError {
    /// Create a new ResponseError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use arpeggio_error::ResponseError;
    ///
    /// let err = ResponseError::new("expected a JSON object with a 'rules' list");
    /// assert!(err.message.contains("rules"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
