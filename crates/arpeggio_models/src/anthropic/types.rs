//! Wire types for the Anthropic Messages API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One conversation turn in an Anthropic request.
///
/// System instructions are not expressed as turns; they travel in the
/// top-level `system` field of [`AnthropicRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// Message role, `"user"` or `"assistant"`
    role: String,
    /// Message text
    content: String,
}

impl AnthropicMessage {
    /// Creates a new builder for constructing an `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Request body for the Anthropic Messages API.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Conversation turns in order, system entries excluded
    messages: Vec<AnthropicMessage>,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Combined system instruction, absent when no system entries were given
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

impl AnthropicRequest {
    /// Creates a new builder for constructing an `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// One content block in an Anthropic response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicContent {
    /// Block type, `"text"` for text blocks
    #[serde(rename = "type")]
    content_type: String,
    /// Generated text, empty for non-text blocks
    #[serde(default)]
    text: String,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Tokens consumed by the input
    #[serde(default)]
    input_tokens: u64,
    /// Tokens produced in the output
    #[serde(default)]
    output_tokens: u64,
}

/// Response body from the Anthropic Messages API.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicResponse {
    /// Response identifier
    id: String,
    /// Generated content blocks in order
    content: Vec<AnthropicContent>,
    /// Model that produced the response
    model: String,
    /// Why generation stopped, when the API reports it
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_reason: Option<String>,
    /// Token accounting for the call
    #[builder(default)]
    #[serde(default)]
    usage: AnthropicUsage,
}

impl AnthropicResponse {
    /// Creates a new builder for constructing an `AnthropicResponse`.
    pub fn builder() -> AnthropicResponseBuilder {
        AnthropicResponseBuilder::default()
    }
}
