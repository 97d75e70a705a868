// Prompt constants for the profile summary analyzer.

use crate::llm_client::prompts::fill_template;

/// Short-form prompt. Replace `{profile_summary}` via `build_summary_prompt`.
pub const SUMMARY_ANALYSIS_PROMPT: &str = r#"Analyze this developer profile summary. Use ONLY bullet points. Keep each point under 8 words. Format as markdown.

Profile Summary: {profile_summary}

Structure:
## Analysis
- [3 bullet points about the profile]

## Improvement Tips
- [3 actionable tips, max 8 words each]
"#;

pub fn build_summary_prompt(profile_summary: &str) -> String {
    fill_template(
        SUMMARY_ANALYSIS_PROMPT,
        &[("profile_summary", profile_summary.trim())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_trimmed_into_prompt() {
        let prompt = build_summary_prompt("  Backend dev, 4 years of Go  ");
        assert!(prompt.contains("Profile Summary: Backend dev, 4 years of Go\n"));
        assert!(prompt.starts_with("Analyze this developer profile summary."));
        assert!(prompt.contains("## Improvement Tips\n- [3 actionable tips, max 8 words each]"));
        assert!(!prompt.contains("## Strengths"));
    }
}
