// All LLM prompt constants for the LeetCode analyzer.

use crate::leetcode::client::LeetCodeStats;
use crate::llm_client::prompts::{fill_template, MARKDOWN_REPORT_INSTRUCTION};

/// LeetCode analysis prompt template. Placeholders are filled by `build_leetcode_prompt`.
pub const LEETCODE_ANALYSIS_PROMPT: &str = r#"# LEETCODE PROFILE ANALYSIS

You are a competitive programming coach and technical interview specialist who knows the hiring bar at startups, mid-tier tech companies and FAANG. Give a calibrated, honest assessment of this developer's interview readiness. Most developers are not ready for FAANG interviews, and the analysis must reflect that.

## STATISTICS

**Total Problems Solved:** {total}
**Difficulty Breakdown:**
- Easy: {easy}
- Medium: {medium}
- Hard: {hard}

**Category-wise Breakdown:**
{categories}

## WHAT TO COVER

1. **Overall proficiency**: exactly one of 🔴 BEGINNER (0-50 total), 🟡 INTERMEDIATE (51-150), 🟢 ADVANCED (151-300), 🔵 EXPERT (300+, with 100+ Medium and 50+ Hard). Justify it, say what separates them from the next level and how long that realistically takes.
2. **Difficulty distribution**: percentages per difficulty, compared with these benchmarks: entry level 30+ Easy and 20+ Medium; mid-tier 40+ Easy, 60+ Medium, 15+ Hard; FAANG 50+ Easy, 150+ Medium, 50+ Hard; elite trading firms 200+ Medium, 100+ Hard. Flag Easy above 40% of the total. The healthy ratio is roughly 20% Easy, 60% Medium, 20% Hard.
3. **Category coverage**: against the core interview topics (arrays and hashing, two pointers, sliding window, stack, binary search, linked list, trees, graphs, dynamic programming, backtracking, heap, trie) and the advanced ones (intervals, greedy, bit manipulation, math, advanced graphs). Mark each Strong, Adequate, Weak or Missing. List the top 3 strengths, the top 5 critical gaps and any hidden weakness.
4. **Readiness by company tier**: READY FOR, BORDERLINE FOR and NOT READY FOR, using entry level (50 total, 20+ Medium), Series B+ startups (100 total, 50+ Medium, 10+ Hard), mid-tier (150 total, 80+ Medium, 20+ Hard), FAANG (200 total, 150+ Medium, 50+ Hard), elite (300+ total, 200+ Medium, 100+ Hard).
5. **2-4 week study plan**: weekly topics with problem counts and hours, a daily routine, what to do when stuck, and a spaced review schedule.
6. **Prioritised actions (8-12)**: 🔴 critical, 🟡 high, 🟢 medium. Each with why it matters, current gap, measurable target, time and expected impact.
7. **Benchmarking**: percentile estimate among LeetCode users and comparison with successful candidates at each tier.
8. **Final verdict**: current status in one sentence, the biggest bottleneck, the most impactful next step, a realistic timeline, and an honest closing line.

## RULES

- Use the exact numbers above; never invent statistics.
- 100 Easy problems are not worth 100 Medium problems. Weigh difficulty accordingly.
- If the category breakdown is missing, say so and base coverage on the difficulty split only.

## OUTPUT FORMAT

Start with `# LeetCode Profile Analysis Report` and use one `##` section per item above, in order.

{format_instruction}
"#;

pub fn build_leetcode_prompt(stats: &LeetCodeStats) -> String {
    let categories = if stats.categories.is_empty() {
        "Not available".to_string()
    } else {
        stats.categories.join(", ")
    };
    let total = stats.total.to_string();
    let easy = stats.easy.to_string();
    let medium = stats.medium.to_string();
    let hard = stats.hard.to_string();

    fill_template(
        LEETCODE_ANALYSIS_PROMPT,
        &[
            ("total", total.as_str()),
            ("easy", easy.as_str()),
            ("medium", medium.as_str()),
            ("hard", hard.as_str()),
            ("categories", categories.as_str()),
            ("format_instruction", MARKDOWN_REPORT_INSTRUCTION),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_counts_and_joined_categories() {
        let stats = LeetCodeStats {
            total: 212,
            easy: 90,
            medium: 100,
            hard: 22,
            categories: vec!["Array: 80".into(), "Tree: 31".into()],
        };
        let prompt = build_leetcode_prompt(&stats);
        assert!(prompt.contains("**Total Problems Solved:** 212"));
        assert!(prompt.contains("- Easy: 90"));
        assert!(prompt.contains("- Medium: 100"));
        assert!(prompt.contains("- Hard: 22"));
        assert!(prompt.contains("Array: 80, Tree: 31"));
    }

    #[test]
    fn test_prompt_marks_missing_categories() {
        let prompt = build_leetcode_prompt(&LeetCodeStats::default());
        assert!(prompt.contains("**Category-wise Breakdown:**\nNot available"));
        assert!(!prompt.contains("{categories}"));
        assert!(!prompt.contains("{format_instruction}"));
    }
}
