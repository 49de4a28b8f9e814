//! Core data types for the Arpeggio prompt-chaining library.
//!
//! This crate provides the foundation data types shared by the chain engine,
//! the prompt composer, and the backend drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod output;
mod request;
mod role;

pub use message::Message;
pub use output::Output;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
