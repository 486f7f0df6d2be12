//! Wire types for the chat API. Field names are camelCase to match the
//! front-end contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /api/oneshot request body.
///
/// `prompt` defaults to empty when absent so that a missing field and an
/// empty one take the same validation path in the handler.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneshotRequest {
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// POST /api/evaluate-prompt request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePromptRequest {
    #[serde(default)]
    pub current_prompt: String,
    #[serde(default)]
    pub learning_objective: String,
    pub ideal_prompt: Option<String>,
    pub previous_prompt: Option<String>,
    /// Evaluation configuration. Opaque to this system — the keys are
    /// rendered into the rubric prompt as instructional context.
    #[serde(default = "empty_object")]
    pub settings: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Adapter result for a one-shot completion. Returned verbatim by the
/// endpoint on success; `success=false` carries the provider's error text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneshotResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub model: String,
    pub timestamp: String,
}

/// POST /api/evaluate-prompt success envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub success: bool,
    pub evaluation: Value,
    pub ideal_prompt: String,
    pub timestamp: String,
}
