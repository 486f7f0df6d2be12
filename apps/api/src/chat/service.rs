//! Prompt service — the adapter between the chat endpoints and the LLM
//! provider. One shared, stateless instance lives in `AppState` behind
//! `Arc<dyn PromptService>`, so handlers can be tested against a stub.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::warn;

use crate::chat::models::OneshotResult;
use crate::chat::prompts::{
    build_evaluation_prompt, build_ideal_prompt, EVALUATION_SYSTEM, IDEAL_PROMPT_SYSTEM,
    ONESHOT_SYSTEM,
};
use crate::llm_client::{parse_json_lenient, CallOptions, LlmClient, LlmError};

/// The three prompt operations the chat endpoints need.
#[async_trait]
pub trait PromptService: Send + Sync {
    /// One-shot completion. Never errors — provider failure comes back as
    /// `success=false` with the error text, which the handler maps to a
    /// uniform failure response.
    async fn generate_oneshot(
        &self,
        prompt: &str,
        model: Option<&str>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> OneshotResult;

    /// Writes a model RTCF prompt for the learning objective.
    async fn generate_ideal_prompt(
        &self,
        learning_objective: &str,
        settings: &Value,
    ) -> Result<String, LlmError>;

    /// Grades the student prompt against the RTCF rubric. The result is the
    /// provider's JSON passed through opaquely (best-effort parsed).
    async fn evaluate_prompt(
        &self,
        current_prompt: &str,
        learning_objective: &str,
        settings: &Value,
        previous_prompt: Option<&str>,
    ) -> Result<Value, LlmError>;
}

/// OpenAI-backed implementation used in production.
pub struct OpenAiPromptService {
    llm: LlmClient,
}

impl OpenAiPromptService {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PromptService for OpenAiPromptService {
    async fn generate_oneshot(
        &self,
        prompt: &str,
        model: Option<&str>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> OneshotResult {
        let defaults = CallOptions::default();
        let opts = CallOptions {
            model: model.map(str::to_string).unwrap_or(defaults.model),
            temperature: temperature.unwrap_or(defaults.temperature),
            max_tokens: max_tokens.unwrap_or(defaults.max_tokens),
        };

        match self.llm.call(prompt, ONESHOT_SYSTEM, &opts).await {
            Ok(response) => match response.text() {
                Some(text) => OneshotResult {
                    success: true,
                    text: Some(text.to_string()),
                    error: None,
                    model: response.model.clone(),
                    timestamp: Utc::now().to_rfc3339(),
                },
                None => failed_oneshot(&opts.model, LlmError::EmptyContent.to_string()),
            },
            Err(e) => {
                warn!("Oneshot call failed: {e}");
                failed_oneshot(&opts.model, e.to_string())
            }
        }
    }

    async fn generate_ideal_prompt(
        &self,
        learning_objective: &str,
        settings: &Value,
    ) -> Result<String, LlmError> {
        let prompt = build_ideal_prompt(learning_objective, settings);
        let response = self.llm.call(&prompt, IDEAL_PROMPT_SYSTEM, &CallOptions::default()).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.trim().to_string())
    }

    async fn evaluate_prompt(
        &self,
        current_prompt: &str,
        learning_objective: &str,
        settings: &Value,
        previous_prompt: Option<&str>,
    ) -> Result<Value, LlmError> {
        let prompt = build_evaluation_prompt(
            current_prompt,
            learning_objective,
            settings,
            previous_prompt,
        );
        let response = self.llm.call(&prompt, EVALUATION_SYSTEM, &CallOptions::default()).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(parse_json_lenient(text))
    }
}

fn failed_oneshot(model: &str, error: String) -> OneshotResult {
    OneshotResult {
        success: false,
        text: None,
        error: Some(error),
        model: model.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }
}
