//! LLM client: the single point of entry for all text generation calls in DevLens.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All LLM interactions MUST go through `CompletionClient`.
//!
//! The outbound call sits behind the `TextGenerator` trait; `GeminiClient` is the
//! production backend, tests plug in scripted doubles.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

pub mod gemini;
pub mod prompts;
pub mod retry;

pub use gemini::GeminiClient;
pub use retry::RetryPolicy;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Prompt blocked by upstream: {0}")]
    Blocked(String),

    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Completion did not finish within {}s", .0.as_secs())]
    DeadlineExceeded(Duration),
}

/// "Generate text from prompt", the one outbound dependency of the completion client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Immutable settings for a `CompletionClient`.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub model: String,
    pub max_attempts: u32,
    pub backoff_step: Duration,
}

/// Wraps a `TextGenerator` with bounded retries and linear backoff on rate limits.
///
/// Holds no per-call state: clones share the generator and the configuration only,
/// so concurrent callers run fully independent retry sequences.
#[derive(Clone)]
pub struct CompletionClient {
    generator: Arc<dyn TextGenerator>,
    model: String,
    policy: RetryPolicy,
}

impl CompletionClient {
    pub fn new(generator: Arc<dyn TextGenerator>, config: CompletionConfig) -> Self {
        Self {
            generator,
            model: config.model,
            policy: RetryPolicy::new(config.max_attempts, config.backoff_step),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Generates text for `prompt`, retrying rate-limited attempts.
    ///
    /// Returns the first successful text. A terminal error is returned right away; a
    /// retryable error on the final attempt is returned as-is.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if prompt.trim().is_empty() {
            return Err(LlmError::EmptyPrompt);
        }

        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            let err = match self.generator.generate(&self.model, prompt).await {
                Ok(text) => {
                    debug!(attempt, max_attempts, "completion succeeded");
                    return Ok(text);
                }
                Err(err) => err,
            };

            if !self.policy.should_retry(attempt, &err) {
                warn!(
                    attempt,
                    max_attempts,
                    retrying = false,
                    error = %err,
                    "completion attempt failed"
                );
                return Err(err);
            }

            let wait = self.policy.backoff_for(attempt);
            warn!(
                attempt,
                max_attempts,
                retrying = true,
                wait_secs = wait.as_secs(),
                error = %err,
                "completion rate limited, backing off"
            );
            tokio::time::sleep(wait).await;
            attempt += 1;
        }
    }

    /// Same as `complete`, abandoned once `deadline` has elapsed.
    ///
    /// Whatever is in flight at expiry (the upstream call or a backoff sleep) is dropped.
    pub async fn complete_within(
        &self,
        prompt: &str,
        deadline: Duration,
    ) -> Result<String, LlmError> {
        match tokio::time::timeout(deadline, self.complete(prompt)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(deadline_secs = deadline.as_secs(), "completion deadline exceeded");
                Err(LlmError::DeadlineExceeded(deadline))
            }
        }
    }
}
