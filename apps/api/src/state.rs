use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::github::client::GitHubClient;
use crate::leetcode::client::LeetCodeClient;
use crate::llm_client::{CompletionClient, GeminiClient};

/// Shared application state injected into all route handlers via Axum extractors.
/// Every field is immutable after startup; clones are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub llm: CompletionClient,
    pub github: GitHubClient,
    pub leetcode: LeetCodeClient,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let gemini = GeminiClient::new(
            config.gemini_api_key.clone(),
            config.gemini_api_base.clone(),
            config.llm_request_timeout,
        )
        .context("Failed to build Gemini HTTP client")?;
        let llm = CompletionClient::new(Arc::new(gemini), config.completion());

        Self::with_llm(config, llm)
    }

    /// Builds the state around an already configured completion client.
    pub fn with_llm(config: Config, llm: CompletionClient) -> Result<Self> {
        let github = GitHubClient::new(config.github_api_base.clone(), config.github_token.clone())
            .context("Failed to build GitHub HTTP client")?;
        let leetcode = LeetCodeClient::new(config.leetcode_graphql_url.clone())
            .context("Failed to build LeetCode HTTP client")?;

        Ok(AppState {
            llm,
            github,
            leetcode,
            config,
        })
    }
}
