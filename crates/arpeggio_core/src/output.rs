//! Output types from backend responses.

use serde::{Deserialize, Serialize};

/// Supported output types from generation backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output, for backends that parse server-side.
    Json(serde_json::Value),
}
