//! Error types for the Arpeggio library.
//!
//! This crate provides the foundation error types used throughout the Arpeggio
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use arpeggio_error::{ArpeggioResult, ChainError, ChainErrorKind};
//!
//! fn load_chain() -> ArpeggioResult<String> {
//!     Err(ChainError::new(ChainErrorKind::Read("no such file".into())))?
//! }
//!
//! match load_chain() {
//!     Ok(chain) => println!("Loaded: {}", chain),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod builder;
mod chain;
mod config;
mod error;
mod response;
mod template;

pub use backend::{BackendError, BackendErrorKind};
pub use builder::{BuilderError, BuilderErrorKind};
pub use chain::{ChainError, ChainErrorKind};
pub use config::ConfigError;
pub use error::{ArpeggioError, ArpeggioErrorKind, ArpeggioResult};
pub use response::ResponseError;
pub use template::{TemplateError, TemplateErrorKind};
