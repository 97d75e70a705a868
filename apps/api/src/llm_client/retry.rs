//! Retry policy for the completion client.
//!
//! Retryability is decided from the upstream's own error text plus a 429 status. The
//! upstream surfaces rate limiting as text ("429", "retry in 20s", "Resource has been
//! exhausted"), so the markers below are the contract. Update them here and nowhere else.

use std::time::Duration;

use super::LlmError;

/// Substrings (lower-case) that mark an upstream failure as a transient rate limit.
const RATE_LIMIT_MARKERS: &[&str] = &[
    "429",
    "retry",
    "resource has been exhausted",
    "resource_exhausted",
];

const TOO_MANY_REQUESTS: u16 = 429;

/// Returns true when the upstream message carries a rate-limit indicator.
///
/// Only the upstream's own text is inspected: the API error message and the transport
/// error's cause. Local failures (empty prompt, deadline, empty or blocked output) are
/// never retried.
pub fn is_retryable(error: &LlmError) -> bool {
    match error {
        LlmError::Api { status, message } => {
            *status == TOO_MANY_REQUESTS || has_rate_limit_marker(message)
        }
        LlmError::Http(err) => {
            err.status().map(|s| s.as_u16()) == Some(TOO_MANY_REQUESTS)
                || std::error::Error::source(err)
                    .is_some_and(|cause| has_rate_limit_marker(&cause.to_string()))
        }
        _ => false,
    }
}

fn has_rate_limit_marker(message: &str) -> bool {
    let message = message.to_lowercase();
    RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Bounded attempts with a linear backoff: attempt `n` waits `n * step` before `n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_step: Duration,
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one attempt.
    pub fn new(max_attempts: u32, backoff_step: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_step,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait inserted after a retryable failure on `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }

    /// Whether a failure on `attempt` should be followed by another attempt.
    pub fn should_retry(&self, attempt: u32, error: &LlmError) -> bool {
        attempt < self.max_attempts && is_retryable(error)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(15))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> LlmError {
        LlmError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_status_429_is_retryable() {
        assert!(is_retryable(&api(429, "Too Many Requests")));
    }

    #[test]
    fn test_resource_exhausted_message_is_retryable() {
        assert!(is_retryable(&api(
            400,
            "Resource has been exhausted (e.g. check quota)."
        )));
        assert!(is_retryable(&api(400, "status: RESOURCE_EXHAUSTED")));
    }

    #[test]
    fn test_retry_hint_is_retryable_case_insensitive() {
        assert!(is_retryable(&api(503, "Please Retry in 21s")));
    }

    #[test]
    fn test_auth_failure_is_terminal() {
        assert!(!is_retryable(&api(401, "invalid api key")));
        assert!(!is_retryable(&LlmError::EmptyContent));
    }

    #[test]
    fn test_local_errors_never_retried_even_with_marker_text() {
        // Display reads "Completion did not finish within 429s".
        assert!(!is_retryable(&LlmError::DeadlineExceeded(Duration::from_secs(429))));
        assert!(!is_retryable(&LlmError::Blocked("retry later".to_string())));
        assert!(!is_retryable(&LlmError::EmptyPrompt));
    }

    #[test]
    fn test_marker_in_message_only_not_wrapper() {
        // "Gemini API error (status 500): ..." carries no marker of its own.
        assert!(!is_retryable(&api(500, "Internal error encountered.")));
        assert!(is_retryable(&api(500, "Internal error, retry later.")));
    }

    #[test]
    fn test_backoff_is_linear_in_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(1), Duration::from_secs(15));
        assert_eq!(policy.backoff_for(2), Duration::from_secs(30));
        assert_eq!(policy.backoff_for(3), Duration::from_secs(45));
    }

    #[test]
    fn test_no_retry_on_final_attempt() {
        let policy = RetryPolicy::default();
        let err = api(429, "Too Many Requests");
        assert!(policy.should_retry(1, &err));
        assert!(policy.should_retry(2, &err));
        assert!(!policy.should_retry(3, &err));
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::from_secs(1)).max_attempts(), 1);
    }
}
