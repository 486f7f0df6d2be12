//! Axum route handlers for the chat API.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::chat::models::{
    EvaluatePromptRequest, EvaluateResponse, OneshotRequest, OneshotResult,
};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/oneshot
///
/// Forwards the learner's prompt to the provider and returns the adapter's
/// result object verbatim. The adapter reports failure as `success=false`,
/// which becomes a 500 carrying the provider's error text.
pub async fn handle_oneshot(
    State(state): State<AppState>,
    Json(request): Json<OneshotRequest>,
) -> Result<Json<OneshotResult>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }

    let result = state
        .service
        .generate_oneshot(
            &request.prompt,
            request.model.as_deref(),
            request.temperature,
            request.max_tokens,
        )
        .await;

    if !result.success {
        return Err(AppError::Upstream(
            result
                .error
                .unwrap_or_else(|| "LLM call failed".to_string()),
        ));
    }

    Ok(Json(result))
}

/// POST /api/evaluate-prompt
///
/// Grades the learner's prompt against the RTCF rubric. When no ideal prompt
/// is supplied (blank counts as absent), one is generated from the learning
/// objective first; a provided one is echoed back unchanged.
pub async fn handle_evaluate_prompt(
    State(state): State<AppState>,
    Json(request): Json<EvaluatePromptRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if request.current_prompt.trim().is_empty() || request.learning_objective.trim().is_empty() {
        return Err(AppError::Validation(
            "Current prompt and learning objective are required".to_string(),
        ));
    }

    let ideal_prompt = match request
        .ideal_prompt
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        Some(provided) => provided.to_string(),
        None => state
            .service
            .generate_ideal_prompt(&request.learning_objective, &request.settings)
            .await
            .map_err(|e| AppError::Evaluation(e.to_string()))?,
    };

    let evaluation = state
        .service
        .evaluate_prompt(
            &request.current_prompt,
            &request.learning_objective,
            &request.settings,
            request.previous_prompt.as_deref(),
        )
        .await
        .map_err(|e| AppError::Evaluation(e.to_string()))?;

    Ok(Json(EvaluateResponse {
        success: true,
        evaluation,
        ideal_prompt,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests — handlers driven against a stub service with invocation counters
// ────────────────────────────────────────────────────────────────────────────
