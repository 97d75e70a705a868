use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies are `{ "error": message }`, plus `"details"` for upstream failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    /// A collaborator (GitHub, LeetCode, document extraction) failed.
    #[error("{context}: {details}")]
    Upstream {
        context: &'static str,
        details: String,
    },

    /// The completion client failed after its retry policy ran out.
    #[error("{context}: {source}")]
    Llm {
        context: &'static str,
        source: LlmError,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(context: &'static str, details: impl ToString) -> Self {
        AppError::Upstream {
            context,
            details: details.to_string(),
        }
    }

    /// Wraps a completion failure with the handler-specific headline.
    pub fn llm(context: &'static str) -> impl FnOnce(LlmError) -> Self {
        move |source| AppError::Llm { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            AppError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": msg }))
            }
            AppError::Multipart(e) => (e.status(), json!({ "error": e.body_text() })),
            AppError::Upstream { context, details } => {
                tracing::error!("{context}: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": context, "details": details }),
                )
            }
            AppError::Llm { context, source } => {
                tracing::error!("LLM error: {context}: {source}");
                let status = match source {
                    LlmError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (
                    status,
                    json!({ "error": context, "details": source.to_string() }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_error_only() {
        let (status, body) =
            render(AppError::Validation("No GitHub username provided.".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No GitHub username provided." }));
    }

    #[tokio::test]
    async fn test_llm_failure_keeps_upstream_message_in_details() {
        let err = AppError::llm("Analysis failed")(LlmError::Api {
            status: 401,
            message: "invalid api key".into(),
        });
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Analysis failed");
        assert_eq!(
            body["details"],
            "Gemini API error (status 401): invalid api key"
        );
    }

    #[tokio::test]
    async fn test_deadline_maps_to_504() {
        let err = AppError::llm("Analysis failed")(LlmError::DeadlineExceeded(
            Duration::from_secs(180),
        ));
        let (status, _) = render(err).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) = render(AppError::Internal(anyhow::anyhow!("secret"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("details").is_none());
    }
}
