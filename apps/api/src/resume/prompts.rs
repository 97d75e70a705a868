// All LLM prompt constants for the resume analyzer.

use crate::llm_client::prompts::{fill_template, truncate_chars, MARKDOWN_REPORT_INSTRUCTION};

/// Only the head of the resume is sent upstream.
pub const MAX_RESUME_CHARS: usize = 3000;

/// ATS report prompt template. Replace `{resume_text}` via `build_resume_prompt`.
pub const RESUME_ANALYSIS_PROMPT: &str = r#"# ATS RESUME ANALYSIS

You are an ATS (Applicant Tracking System) specialist who knows how Taleo, Workday, Greenhouse, iCIMS and Lever parse and score resumes. Score as strictly as Jobscan, Resume Worded or TopResume would. Most resumes land between 40 and 70; do not inflate.

## RESUME TEXT

{resume_text}

## SCORING (100 points)

- Formatting & Parseability: 25
- Content Quality & Structure: 30
- Keyword Optimization: 25
- Impact & Quantification: 20

Bands: 90-100 exceptional (top 5%), 80-89 excellent, 70-79 good, 60-69 average, 50-59 below average, under 50 poor.

### A. Formatting & Parseability (X/25)
ATS-friendly: simple layout, standard fonts, reverse chronological order, standard dates, plain bullets.
ATS-hostile (deduct heavily for each): tables, text boxes, multiple columns, headers/footers, images, icons, graphics, unusual fonts, rules, special characters.

### B. Content Quality & Structure (X/30)
Required sections: contact information, summary, work experience with companies, titles and dates, education, skills, certifications where relevant, projects for tech roles. Also judge section order, action verbs, bullet structure, consistency, length, tone and chronological gaps.

### C. Keyword Optimization (X/25)
For a general software engineering role: hard skills (languages, frameworks, databases, cloud, DevOps, testing), soft skills, and industry terms (microservices, APIs, system design). Flag missing critical skills, outdated stacks, generic skills only, and keyword stuffing.

### D. Impact & Quantification (X/20)
Numbers, percentages and metrics; STAR structure; achievements vs duties (should exceed 60% achievements). Red flags: "Responsible for...", no metrics, vague or activity-focused bullets.

## REPORT SECTIONS

1. **Overall ATS compatibility score (X/100)** with a 2-3 sentence summary.
2. **Detailed score breakdown**: one subsection per category above with its score, findings and critical issues, quoting the resume.
3. **ATS parsing simulation**: list elements as ✅ successfully parsed, ⚠️ may have issues, ❌ will be lost.
4. **Actionable recommendations (8-12)**: 🔴 Priority 1 critical fixes, 🟡 Priority 2 high impact, 🟢 Priority 3 enhancements. For each: current problem, why it matters, how to fix, expected score impact.
5. **Competitive benchmark**: comparison with similar resumes, major gaps against top performers, strongest advantage.
6. **Final verdict**: one paragraph on ATS readiness, the biggest weakness and the first action to take, ending with a one-sentence **Bottom Line**.

## RULES

- Be strict and realistic; real ATS systems reject 75% of resumes.
- Identify every ATS-hostile element and cite specific text from the resume.
- Focus on parseability first; some issues alone can cost 20+ points.
- Tailor the keyword analysis to tech/software engineering roles.

## OUTPUT FORMAT

Start with `# ATS Resume Analysis Report`, then `## Overall ATS Compatibility Score: X/100`, then one `##` section per report section above, in order, separated by `---`.

{format_instruction}
"#;

pub fn build_resume_prompt(resume_text: &str) -> String {
    fill_template(
        RESUME_ANALYSIS_PROMPT,
        &[
            ("resume_text", truncate_chars(resume_text, MAX_RESUME_CHARS)),
            ("format_instruction", MARKDOWN_REPORT_INSTRUCTION),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = build_resume_prompt("Jane Doe\nStaff Engineer at Acme");
        assert!(prompt.contains("## RESUME TEXT\n\nJane Doe\nStaff Engineer at Acme\n"));
    }

    #[test]
    fn test_prompt_keeps_weighted_categories_and_report_sections() {
        let prompt = build_resume_prompt("Jane Doe");
        for weight in [
            "Formatting & Parseability: 25",
            "Content Quality & Structure: 30",
            "Keyword Optimization: 25",
            "Impact & Quantification: 20",
        ] {
            assert!(prompt.contains(weight), "missing {weight}");
        }
        for section in [
            "ATS parsing simulation",
            "Competitive benchmark",
            "Final verdict",
        ] {
            assert!(prompt.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_prompt_truncates_long_resume() {
        let resume = format!("{}{}", "a".repeat(MAX_RESUME_CHARS), "TAIL_MARKER");
        let prompt = build_resume_prompt(&resume);
        assert!(prompt.contains(&"a".repeat(MAX_RESUME_CHARS)));
        assert!(!prompt.contains("TAIL_MARKER"));
    }
}
