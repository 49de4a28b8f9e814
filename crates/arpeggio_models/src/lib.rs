//! Generation backend drivers for Arpeggio.
//!
//! This crate provides [`ArpeggioDriver`](arpeggio_interface::ArpeggioDriver)
//! implementations that turn composed messages into calls against a hosted
//! model API. Transport and API failures surface unmodified as backend
//! errors; retry policy belongs to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use arpeggio_models::AnthropicClient;
//!
//! let client = AnthropicClient::from_env()?;
//! let response = client.generate(&request).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;

pub use anthropic::{
    AnthropicClient, AnthropicContent, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicResponseBuilder,
    AnthropicUsage,
};
