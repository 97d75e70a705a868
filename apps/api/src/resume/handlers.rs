//! Axum route handler for the resume analyzer.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::extract::{extract_text, DocumentKind};
use crate::resume::prompts::build_resume_prompt;
use crate::routes::SuggestionResponse;
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
pub const RESUME_FIELD: &str = "resume";
const ANALYSIS_FAILED: &str = "Resume analysis failed";

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// POST /api/analyze-resume
///
/// Accepts `multipart/form-data` with a PDF or DOCX under the `resume` field.
/// The route's body limit caps the upload size.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SuggestionResponse>, AppError> {
    let upload = read_resume_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No resume file uploaded.".to_string()))?;

    let kind = DocumentKind::from_filename(&upload.filename).ok_or_else(|| {
        AppError::Validation("Unsupported file type. Please upload a PDF or DOCX.".to_string())
    })?;
    info!(
        filename = %upload.filename,
        size = upload.bytes.len(),
        ?kind,
        "analyzing resume upload"
    );

    // CPU-bound parsing runs off the async executor.
    let bytes = upload.bytes;
    let resume_text = tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in resume extraction: {e}"))
        })?
        .map_err(|e| AppError::upstream(ANALYSIS_FAILED, e))?;

    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract any text from the resume.".to_string(),
        ));
    }
    debug!(chars = resume_text.chars().count(), "extracted resume text");

    let prompt = build_resume_prompt(&resume_text);
    let suggestion = state
        .llm
        .complete_within(&prompt, state.config.analysis_deadline)
        .await
        .map_err(AppError::llm(ANALYSIS_FAILED))?;

    Ok(Json(SuggestionResponse { suggestion }))
}

/// Returns the first `resume` field; other fields are skipped.
async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(Upload {
            filename,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}
