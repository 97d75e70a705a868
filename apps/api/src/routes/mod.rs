pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::errors::AppError;
use crate::github::handlers::handle_analyze_github;
use crate::leetcode::handlers::handle_analyze_leetcode;
use crate::resume::handlers::handle_analyze_resume;
use crate::state::AppState;
use crate::summary::handlers::handle_analyze_summary;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

const CORS_METHODS: [Method; 6] = [
    Method::GET,
    Method::OPTIONS,
    Method::PATCH,
    Method::DELETE,
    Method::POST,
    Method::PUT,
];

const CORS_HEADERS: [&str; 9] = [
    "x-csrf-token",
    "x-requested-with",
    "accept",
    "accept-version",
    "content-length",
    "content-md5",
    "content-type",
    "date",
    "x-api-version",
];

/// Success body shared by every analysis endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::index_handler))
        .route(
            "/api/analyze",
            post(handle_analyze_summary).fallback(method_not_allowed),
        )
        .route(
            "/api/analyze-github",
            post(handle_analyze_github).fallback(method_not_allowed),
        )
        .route(
            "/api/analyze-leetcode",
            post(handle_analyze_leetcode).fallback(method_not_allowed),
        )
        .route(
            "/api/analyze-resume",
            post(handle_analyze_resume)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

/// Analysis routes only accept POST; every other method gets the JSON error body.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Any origin without credentials, or an explicit origin list with credentials.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(CORS_METHODS.to_vec())
        .allow_headers(CORS_HEADERS.map(HeaderName::from_static).to_vec());

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
