//! Client for the Anthropic Messages API.

use crate::anthropic::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use arpeggio_core::{GenerateRequest, GenerateResponse, Output, Role};
use arpeggio_error::{ArpeggioResult, BackendError, BackendErrorKind};
use arpeggio_interface::ArpeggioDriver;
use async_trait::async_trait;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Generation backend talking to the Anthropic Messages API.
///
/// Consecutive system entries in a request are merged into a single system
/// instruction, joined with spaces. Non-system entries keep their relative
/// order. Requests may override the client's model, token limit, and
/// temperature per call.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicClient {
    /// Creates a client with the given API key and model identifier.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Creates a client from the `ANTHROPIC_API_KEY` environment variable,
    /// using the default model.
    pub fn from_env() -> Result<Self, BackendError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| BackendError::new(BackendErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key, DEFAULT_MODEL))
    }

    /// Sets the token limit applied when a request does not specify one.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the temperature applied when a request does not specify one.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Converts a generation request into the Anthropic wire format.
    ///
    /// System entries are pulled out of the turn list and joined into the
    /// top-level `system` field, which is left unset when they join to an
    /// empty string.
    fn convert_request(&self, request: &GenerateRequest) -> Result<AnthropicRequest, BackendError> {
        let mut messages = Vec::new();
        let mut system_parts = Vec::new();
        for message in &request.messages {
            match message.role {
                Role::System => system_parts.push(message.content.as_str()),
                _ => {
                    let turn = AnthropicMessage::builder()
                        .role(message.role.as_str())
                        .content(message.content.clone())
                        .build()
                        .map_err(|e| {
                            BackendError::new(BackendErrorKind::Conversion(e.to_string()))
                        })?;
                    messages.push(turn);
                }
            }
        }
        let system = system_parts.join(" ");

        let mut builder = AnthropicRequest::builder();
        builder.model(request.model.clone().unwrap_or_else(|| self.model.clone()));
        builder.messages(messages);
        builder.max_tokens(request.max_tokens.unwrap_or(self.max_tokens));
        builder.temperature(request.temperature.unwrap_or(self.temperature));
        if !system.is_empty() {
            builder.system(system);
        }
        builder
            .build()
            .map_err(|e| BackendError::new(BackendErrorKind::Conversion(e.to_string())))
    }

    /// Converts an Anthropic response into the unified response format.
    fn convert_response(response: &AnthropicResponse) -> GenerateResponse {
        let outputs = response
            .content()
            .iter()
            .map(|block| Output::Text(block.text().clone()))
            .collect();
        GenerateResponse { outputs }
    }

    #[instrument(skip(self, request))]
    async fn generate_anthropic(
        &self,
        request: &GenerateRequest,
    ) -> ArpeggioResult<GenerateResponse> {
        let anthropic_request = self.convert_request(request)?;
        debug!(
            model = %anthropic_request.model(),
            messages = anthropic_request.messages().len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| BackendError::new(BackendErrorKind::Http(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            error!(status = status.as_u16(), "generation request failed");
            return Err(BackendError::new(BackendErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| BackendError::new(BackendErrorKind::Parse(e.to_string())))?;
        debug!(
            stop_reason = ?anthropic_response.stop_reason(),
            input_tokens = anthropic_response.usage().input_tokens(),
            output_tokens = anthropic_response.usage().output_tokens(),
            "generation request succeeded"
        );

        Ok(Self::convert_response(&anthropic_response))
    }
}

#[async_trait]
impl ArpeggioDriver for AnthropicClient {
    async fn generate(&self, req: &GenerateRequest) -> ArpeggioResult<GenerateResponse> {
        self.generate_anthropic(req).await
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
