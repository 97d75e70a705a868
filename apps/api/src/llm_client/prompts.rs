// Shared prompt-building utilities.
// Each analyzer defines its own prompts.rs alongside it; this file holds the
// cross-cutting pieces they all use.

/// Closing instruction appended to every long-form analysis prompt.
pub const MARKDOWN_REPORT_INSTRUCTION: &str = "\
    Return the report as clean GitHub-flavoured markdown only. \
    Use headings, tables and bullet lists where they help scanning. \
    Do NOT wrap the whole report in a code fence. \
    Do NOT add a preamble or closing remarks outside the report.";

/// Replaces each `{key}` placeholder in `template` with its value in a single pass.
/// Substituted values are never scanned for placeholders themselves.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replacement = after.find('}').and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (end, *value))
        });
        match replacement {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns at most `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Uses `fallback` when `value` is missing or blank.
pub fn or_placeholder<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_every_occurrence() {
        let out = fill_template("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y and x");
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        assert_eq!(fill_template("{missing}", &[("a", "x")]), "{missing}");
    }

    #[test]
    fn test_fill_template_does_not_expand_inside_values() {
        let out = fill_template("{bio} / {name}", &[("bio", "{name}"), ("name", "octo")]);
        assert_eq!(out, "{name} / octo");
    }

    #[test]
    fn test_fill_template_keeps_literal_braces() {
        assert_eq!(fill_template("a { b } {c", &[("c", "x")]), "a { b } {c");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("⭐⭐⭐", 2), "⭐⭐");
        assert_eq!(truncate_chars("short", 3000), "short");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some("Berlin"), "Not set"), "Berlin");
        assert_eq!(or_placeholder(Some("   "), "Not set"), "Not set");
        assert_eq!(or_placeholder(None, "N/A"), "N/A");
    }
}
