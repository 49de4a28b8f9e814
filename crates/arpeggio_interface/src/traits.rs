//! Trait definitions for generation backends.

use arpeggio_core::{GenerateRequest, GenerateResponse};
use arpeggio_error::ArpeggioResult;
use async_trait::async_trait;

/// Core trait that all generation backends must implement.
///
/// The chain engine talks to backends exclusively through this trait. A
/// backend receives the composed messages in order and may merge same-role
/// system entries into a single system instruction, but must preserve the
/// relative order of all non-system entries.
#[async_trait]
pub trait ArpeggioDriver: Send + Sync {
    /// Generate model output for an ordered list of role-tagged messages.
    async fn generate(&self, req: &GenerateRequest) -> ArpeggioResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    fn model_name(&self) -> &str;
}
