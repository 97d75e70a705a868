use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::routes::SuggestionResponse;
use crate::state::AppState;
use crate::summary::prompts::build_summary_prompt;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSummaryRequest {
    pub profile_summary: Option<String>,
}

/// POST /api/analyze
pub async fn handle_analyze_summary(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeSummaryRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let summary = request
        .profile_summary
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No profile summary provided.".to_string()))?;

    let prompt = build_summary_prompt(&summary);
    let suggestion = state
        .llm
        .complete_within(&prompt, state.config.analysis_deadline)
        .await
        .map_err(AppError::llm("Analysis failed"))?;

    Ok(Json(SuggestionResponse { suggestion }))
}
