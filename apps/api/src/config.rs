use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::CompletionConfig;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_LEETCODE_GRAPHQL_URL: &str = "https://leetcode.com/graphql";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub llm_max_attempts: u32,
    pub llm_backoff_step: Duration,
    pub llm_request_timeout: Duration,
    /// Upper bound on a whole completion sequence, backoff included.
    pub analysis_deadline: Duration,
    pub github_api_base: String,
    pub github_token: Option<String>,
    pub leetcode_graphql_url: String,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY")
                .context("Required environment variable 'GEMINI_API_KEY' is not set")?,
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: get("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            llm_max_attempts: parse_or("LLM_MAX_ATTEMPTS", get("LLM_MAX_ATTEMPTS"), 3)?,
            llm_backoff_step: Duration::from_secs(parse_or(
                "LLM_BACKOFF_STEP_SECS",
                get("LLM_BACKOFF_STEP_SECS"),
                15,
            )?),
            llm_request_timeout: Duration::from_secs(parse_or(
                "LLM_REQUEST_TIMEOUT_SECS",
                get("LLM_REQUEST_TIMEOUT_SECS"),
                120,
            )?),
            analysis_deadline: Duration::from_secs(parse_or(
                "ANALYSIS_DEADLINE_SECS",
                get("ANALYSIS_DEADLINE_SECS"),
                180,
            )?),
            github_api_base: get("GITHUB_API_BASE")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE.to_string()),
            github_token: get("GITHUB_TOKEN"),
            leetcode_graphql_url: get("LEETCODE_GRAPHQL_URL")
                .unwrap_or_else(|| DEFAULT_LEETCODE_GRAPHQL_URL.to_string()),
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_default(),
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                get("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            port: parse_or("PORT", get("PORT"), 5000)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn completion(&self) -> CompletionConfig {
        CompletionConfig {
            model: self.gemini_model.clone(),
            max_attempts: self.llm_max_attempts,
            backoff_step: self.llm_backoff_step,
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{value}'")),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied_when_only_api_key_set() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.llm_max_attempts, 3);
        assert_eq!(config.llm_backoff_step, Duration::from_secs(15));
        assert_eq!(config.analysis_deadline, Duration::from_secs(180));
        assert_eq!(config.max_upload_bytes, 4 * 1024 * 1024);
        assert_eq!(config.port, 5000);
        assert!(config.github_token.is_none());
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        assert!(Config::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")])).is_err());
    }

    #[test]
    fn test_invalid_number_is_reported_with_key() {
        let err = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "k"), ("PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_overrides_and_origin_list() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("LLM_MAX_ATTEMPTS", "5"),
            ("LLM_BACKOFF_STEP_SECS", "2"),
            ("CORS_ALLOWED_ORIGINS", "https://a.dev/, https://b.dev,,"),
        ]))
        .unwrap();

        let completion = config.completion();
        assert_eq!(completion.model, "gemini-2.0-flash");
        assert_eq!(completion.max_attempts, 5);
        assert_eq!(completion.backoff_step, Duration::from_secs(2));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.dev".to_string(), "https://b.dev".to_string()]
        );
    }
}
