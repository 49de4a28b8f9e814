//! Anthropic Messages API driver.

mod client;
mod types;

pub use client::AnthropicClient;
pub use types::{
    AnthropicContent, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicResponseBuilder, AnthropicUsage,
};
