//! Axum route handler for the GitHub analyzer.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::github::client::{normalize_username, GitHubError};
use crate::github::prompts::build_github_prompt;
use crate::routes::SuggestionResponse;
use crate::state::AppState;

const ANALYSIS_FAILED: &str = "Gemini GitHub analysis failed";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeGitHubRequest {
    pub github_profile: Option<String>,
}

/// POST /api/analyze-github
///
/// Accepts a username or profile URL, fetches the public profile and repositories,
/// and returns the markdown analysis.
pub async fn handle_analyze_github(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeGitHubRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let username = normalize_username(request.github_profile.as_deref().unwrap_or_default());
    if username.is_empty() {
        return Err(AppError::Validation(
            "No GitHub username provided.".to_string(),
        ));
    }

    let data = state
        .github
        .fetch_user(&username)
        .await
        .map_err(|e| match e {
            GitHubError::UserNotFound => AppError::NotFound("GitHub user not found".to_string()),
            other => AppError::upstream(ANALYSIS_FAILED, other),
        })?;
    info!(%username, repos = data.repos.len(), "analyzing GitHub profile");

    let prompt = build_github_prompt(&data);
    let suggestion = state
        .llm
        .complete_within(&prompt, state.config.analysis_deadline)
        .await
        .map_err(AppError::llm(ANALYSIS_FAILED))?;

    Ok(Json(SuggestionResponse { suggestion }))
}
