//! LeetCode public GraphQL client.
//!
//! Solve counts are required; skill tags are best effort and never fail a lookup.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const LEETCODE_ORIGIN: &str = "https://leetcode.com";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const PROBLEMS_SOLVED_QUERY: &str = r#"query userProblemsSolved($username: String!) {
  matchedUser(username: $username) {
    username
    submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}"#;

const SKILL_STATS_QUERY: &str = r#"query skillStats($username: String!) {
  matchedUser(username: $username) {
    tagProblemCounts {
      advanced { tagName problemsSolved }
      intermediate { tagName problemsSolved }
      fundamental { tagName problemsSolved }
    }
  }
}"#;

#[derive(Debug, Error)]
pub enum LeetCodeError {
    #[error("LeetCode user not found")]
    UserNotFound,

    #[error("LeetCode API error (status {status})")]
    Api { status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemsSolvedData {
    matched_user: Option<ProblemsSolvedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemsSolvedUser {
    submit_stats_global: SubmitStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    #[serde(default)]
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillStatsData {
    matched_user: Option<SkillStatsUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillStatsUser {
    tag_problem_counts: Option<TagProblemCounts>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagProblemCounts {
    #[serde(default)]
    pub fundamental: Vec<TagCount>,
    #[serde(default)]
    pub intermediate: Vec<TagCount>,
    #[serde(default)]
    pub advanced: Vec<TagCount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCount {
    pub tag_name: String,
    pub problems_solved: u32,
}

/// Accepted-submission totals plus per-topic counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeetCodeStats {
    pub total: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    /// `"{tag}: {solved}"`, most solved first.
    pub categories: Vec<String>,
}

impl LeetCodeStats {
    /// Picks the four difficulty buckets; a missing bucket counts as zero.
    pub fn from_counts(counts: &[DifficultyCount]) -> Self {
        let count_for = |difficulty: &str| {
            counts
                .iter()
                .find(|c| c.difficulty == difficulty)
                .map(|c| c.count)
                .unwrap_or(0)
        };
        LeetCodeStats {
            total: count_for("All"),
            easy: count_for("Easy"),
            medium: count_for("Medium"),
            hard: count_for("Hard"),
            categories: Vec::new(),
        }
    }
}

/// Flattens all tag tiers, drops unsolved tags, sorts by solved count descending.
pub fn categories_from_tags(tags: TagProblemCounts) -> Vec<String> {
    let mut all: Vec<TagCount> = tags
        .fundamental
        .into_iter()
        .chain(tags.intermediate)
        .chain(tags.advanced)
        .filter(|t| t.problems_solved > 0)
        .collect();
    // Stable sort keeps the fundamental → advanced order among equal counts.
    all.sort_by(|a, b| b.problems_solved.cmp(&a.problems_solved));
    all.into_iter()
        .map(|t| format!("{}: {}", t.tag_name, t.problems_solved))
        .collect()
}

#[derive(Clone)]
pub struct LeetCodeClient {
    client: Client,
    graphql_url: String,
}

impl LeetCodeClient {
    pub fn new(graphql_url: String) -> Result<Self, LeetCodeError> {
        Ok(Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent(BROWSER_USER_AGENT)
                .build()?,
            graphql_url,
        })
    }

    pub async fn fetch_stats(&self, username: &str) -> Result<LeetCodeStats, LeetCodeError> {
        let solved: ProblemsSolvedData = self
            .query(PROBLEMS_SOLVED_QUERY, username)
            .await?
            .ok_or(LeetCodeError::UserNotFound)?;
        let user = solved.matched_user.ok_or(LeetCodeError::UserNotFound)?;

        let mut stats = LeetCodeStats::from_counts(&user.submit_stats_global.ac_submission_num);

        match self.query::<SkillStatsData>(SKILL_STATS_QUERY, username).await {
            Ok(Some(SkillStatsData {
                matched_user:
                    Some(SkillStatsUser {
                        tag_problem_counts: Some(tags),
                    }),
            })) => stats.categories = categories_from_tags(tags),
            Ok(_) => debug!(username, "LeetCode returned no skill tags"),
            Err(e) => warn!(username, error = %e, "LeetCode skill tags unavailable, continuing without them"),
        }

        debug!(username, total = stats.total, "fetched LeetCode stats");
        Ok(stats)
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        username: &str,
    ) -> Result<Option<T>, LeetCodeError> {
        let response = self
            .client
            .post(&self.graphql_url)
            .header("Referer", LEETCODE_ORIGIN)
            .header("Origin", LEETCODE_ORIGIN)
            .header("Accept", "application/json")
            .json(&GraphQlRequest {
                query,
                variables: json!({ "username": username }),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeetCodeError::Api {
                status: status.as_u16(),
            });
        }

        let body: GraphQlResponse<T> = response.json().await?;
        Ok(body.data)
    }
}

/// Accepts a bare username or a `leetcode.com` profile URL; returns the username.
pub fn normalize_username(input: &str) -> String {
    let trimmed = input.trim();
    let without_profile = trimmed
        .strip_prefix("https://leetcode.com/u/")
        .unwrap_or(trimmed);
    let without_host = without_profile
        .strip_prefix("https://leetcode.com/")
        .unwrap_or(without_profile);
    without_host
        .strip_suffix('/')
        .unwrap_or(without_host)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, solved: u32) -> TagCount {
        TagCount {
            tag_name: name.to_string(),
            problems_solved: solved,
        }
    }

    #[test]
    fn test_normalize_profile_urls() {
        assert_eq!(normalize_username("https://leetcode.com/u/neal_wu/"), "neal_wu");
        assert_eq!(normalize_username("https://leetcode.com/neal_wu"), "neal_wu");
        assert_eq!(normalize_username("  neal_wu "), "neal_wu");
        assert_eq!(normalize_username(""), "");
    }

    #[test]
    fn test_stats_from_counts_defaults_missing_buckets_to_zero() {
        let counts = vec![
            DifficultyCount {
                difficulty: "All".into(),
                count: 120,
            },
            DifficultyCount {
                difficulty: "Medium".into(),
                count: 70,
            },
        ];
        let stats = LeetCodeStats::from_counts(&counts);
        assert_eq!(stats.total, 120);
        assert_eq!(stats.easy, 0);
        assert_eq!(stats.medium, 70);
        assert_eq!(stats.hard, 0);
    }

    #[test]
    fn test_categories_filtered_and_sorted() {
        let tags = TagProblemCounts {
            fundamental: vec![tag("Array", 80), tag("String", 0)],
            intermediate: vec![tag("Dynamic Programming", 35), tag("Hash Table", 80)],
            advanced: vec![tag("Trie", 4)],
        };
        assert_eq!(
            categories_from_tags(tags),
            vec![
                "Array: 80",
                "Hash Table: 80",
                "Dynamic Programming: 35",
                "Trie: 4"
            ]
        );
    }

    #[test]
    fn test_problems_solved_payload_parses() {
        let json = r#"{"data": {"matchedUser": {"username": "neal_wu", "submitStatsGlobal":
            {"acSubmissionNum": [
                {"difficulty": "All", "count": 300, "submissions": 400},
                {"difficulty": "Easy", "count": 100, "submissions": 120},
                {"difficulty": "Medium", "count": 150, "submissions": 200},
                {"difficulty": "Hard", "count": 50, "submissions": 80}
            ]}}}}"#;
        let response: GraphQlResponse<ProblemsSolvedData> = serde_json::from_str(json).unwrap();
        let user = response.data.unwrap().matched_user.unwrap();
        let stats = LeetCodeStats::from_counts(&user.submit_stats_global.ac_submission_num);
        assert_eq!((stats.total, stats.easy, stats.medium, stats.hard), (300, 100, 150, 50));
    }

    #[test]
    fn test_unknown_user_payload_has_no_matched_user() {
        let json = r#"{"data": {"matchedUser": null}, "errors": [{"message": "That user does not exist."}]}"#;
        let response: GraphQlResponse<ProblemsSolvedData> = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().matched_user.is_none());
    }

    #[test]
    fn test_skill_payload_with_missing_tier_parses() {
        let json = r#"{"matchedUser": {"tagProblemCounts": {"fundamental": [{"tagName": "Array", "problemsSolved": 3}]}}}"#;
        let data: SkillStatsData = serde_json::from_str(json).unwrap();
        let tags = data.matched_user.unwrap().tag_problem_counts.unwrap();
        assert_eq!(categories_from_tags(tags), vec!["Array: 3"]);
    }
}
