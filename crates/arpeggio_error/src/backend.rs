//! Generation backend error types.

/// Specific error conditions for generation backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BackendErrorKind {
    /// ANTHROPIC_API_KEY environment variable not set
    #[display("ANTHROPIC_API_KEY environment variable not set")]
    MissingApiKey,
    /// Transport-level failure (connection, TLS, timeout)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Non-success status returned by the API
    #[display("API returned HTTP {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to decode API response: {}", _0)]
    Parse(String),
    /// Request could not be converted to the provider's wire format
    #[display("Failed to convert request: {}", _0)]
    Conversion(String),
}

/// Error type for generation backend operations.
///
/// Transport and API failures are carried through to the caller without
/// retry or reinterpretation.
///
/// # Examples
///
/// ```
/// use arpeggio_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::Api {
///     status: 429,
///     message: "rate limited".into(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// The specific error condition
    pub kind: BackendErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
