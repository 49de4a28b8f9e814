//! Chain configuration and execution error types.

/// Specific error conditions for chain loading and execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ChainErrorKind {
    /// Failed to read a chain or problem-set file
    #[display("Failed to read file: {}", _0)]
    Read(String),
    /// Failed to parse chain TOML content
    #[display("Failed to parse chain TOML: {}", _0)]
    Parse(String),
    /// Step references a function name absent from the registry
    #[display("Step function '{}' is not registered", _0)]
    UnknownStepFunction(String),
    /// A handler required a context key that was never written
    #[display("Required context key '{}' is missing", _0)]
    MissingContextKey(String),
    /// A context value did not match the shape a handler expects
    #[display("Context key '{}' has an unexpected shape: {}", key, message)]
    InvalidContextValue {
        /// Context key
        key: String,
        /// What went wrong
        message: String,
    },
    /// Problem-set file contents were not a valid problem set
    #[display("Invalid problem set: {}", _0)]
    ProblemSet(String),
    /// Failed to serialize a value for prompt assembly or context storage
    #[display("Serialization failed: {}", _0)]
    Serialization(String),
    /// One or more step processors reported failures
    #[display("Step processor failed: {}", _0)]
    Processor(String),
}

/// Error type for chain operations.
///
/// # Examples
///
/// ```
/// use arpeggio_error::{ChainError, ChainErrorKind};
///
/// let err = ChainError::new(ChainErrorKind::UnknownStepFunction("warp".into()));
/// assert!(format!("{}", err).contains("not registered"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chain Error: {} at line {} in {}", kind, line, file)]
pub struct ChainError {
    /// The specific error condition
    pub kind: ChainErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ChainError {
    /// Create a new ChainError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChainErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
