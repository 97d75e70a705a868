//! Minimal GitHub REST client: one profile lookup and one repository listing.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("devlens-api/", env!("CARGO_PKG_VERSION"));
const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub user not found")]
    UserNotFound,

    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Subset of `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub location: Option<String>,
    pub company: Option<String>,
    pub twitter_username: Option<String>,
    pub blog: Option<String>,
}

/// Subset of one entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GitHubData {
    pub profile: GitHubProfile,
    pub repos: Vec<GitHubRepo>,
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: String, token: Option<String>) -> Result<Self, GitHubError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .user_agent(USER_AGENT)
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Fetches the profile first; a 404 there means the user does not exist.
    pub async fn fetch_user(&self, username: &str) -> Result<GitHubData, GitHubError> {
        let profile: GitHubProfile = self
            .get_json(&format!("{}/users/{}", self.base_url, username))
            .await?;
        let repos: Vec<GitHubRepo> = self
            .get_json(&format!(
                "{}/users/{}/repos?per_page={}",
                self.base_url, username, REPOS_PER_PAGE
            ))
            .await?;

        debug!(
            username,
            repos = repos.len(),
            "fetched GitHub profile and repositories"
        );
        Ok(GitHubData { profile, repos })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GitHubError::UserNotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Accepts a bare username or a profile URL; returns the username.
pub fn normalize_username(input: &str) -> String {
    let trimmed = input.trim();
    let without_host = trimmed
        .strip_prefix("https://github.com/")
        .unwrap_or(trimmed);
    without_host
        .strip_suffix('/')
        .unwrap_or(without_host)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_username() {
        assert_eq!(normalize_username("  octocat "), "octocat");
    }

    #[test]
    fn test_normalize_profile_url_with_trailing_slash() {
        assert_eq!(normalize_username("https://github.com/octocat/"), "octocat");
    }

    #[test]
    fn test_normalize_blank_is_empty() {
        assert_eq!(normalize_username("   "), "");
        assert_eq!(normalize_username("https://github.com/"), "");
    }

    #[test]
    fn test_profile_deserializes_with_nulls() {
        let json = r#"{
            "login": "octocat", "name": null, "bio": null, "public_repos": 8,
            "followers": 100, "following": 9, "location": "San Francisco",
            "company": "@github", "twitter_username": null, "blog": "",
            "avatar_url": "https://example.test/a.png"
        }"#;
        let profile: GitHubProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert!(profile.name.is_none());
        assert_eq!(profile.public_repos, 8);
        assert_eq!(profile.blog.as_deref(), Some(""));
    }

    #[test]
    fn test_repo_deserializes_missing_language() {
        let json = r#"[{"name": "hello-world", "language": null, "stargazers_count": 3,
                        "forks_count": 1, "description": null, "fork": false}]"#;
        let repos: Vec<GitHubRepo> = serde_json::from_str(json).unwrap();
        assert_eq!(repos[0].name, "hello-world");
        assert!(repos[0].language.is_none());
        assert_eq!(repos[0].stargazers_count, 3);
    }
}
