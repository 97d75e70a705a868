//! Axum route handler for the LeetCode analyzer.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::leetcode::client::{normalize_username, LeetCodeError};
use crate::leetcode::prompts::build_leetcode_prompt;
use crate::routes::SuggestionResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeLeetCodeRequest {
    pub leetcode_profile: Option<String>,
}

/// POST /api/analyze-leetcode
pub async fn handle_analyze_leetcode(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeLeetCodeRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let username = normalize_username(request.leetcode_profile.as_deref().unwrap_or_default());
    if username.is_empty() {
        return Err(AppError::Validation(
            "No LeetCode username provided.".to_string(),
        ));
    }

    let stats = state
        .leetcode
        .fetch_stats(&username)
        .await
        .map_err(|e| match e {
            LeetCodeError::UserNotFound => AppError::NotFound(
                "LeetCode user not found. Please check the username.".to_string(),
            ),
            other => AppError::upstream("Failed to fetch LeetCode data", other),
        })?;
    info!(%username, total = stats.total, "analyzing LeetCode profile");

    let prompt = build_leetcode_prompt(&stats);
    let suggestion = state
        .llm
        .complete_within(&prompt, state.config.analysis_deadline)
        .await
        .map_err(AppError::llm("Gemini LeetCode analysis failed"))?;

    Ok(Json(SuggestionResponse { suggestion }))
}
