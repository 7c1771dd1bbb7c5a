//! Envelope extraction: stripping non-JSON wrapping from a free-text reply.

/// Slice the JSON envelope out of raw response text.
///
/// The model is instructed to return bare JSON but in practice wraps it in
/// commentary or markdown fencing. This locates the first `{` and the last
/// `}` and slices inclusively between them; if no such pair exists the
/// trimmed input passes through unchanged (and will fail structured parsing
/// downstream).
///
/// Best-effort heuristic, not a parser: it assumes one top-level object with
/// no unbalanced braces inside string content. A string value containing a
/// literal `{` or `}` before the real closing brace can truncate incorrectly.
/// Known limitation, kept for compatibility with upstream response quirks.
pub fn extract_envelope(raw: &str) -> &str {
    let trimmed = raw.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(first), Some(last)) if first < last => &trimmed[first..=last],
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_surrounding_commentary() {
        let raw = r#"Here is the result: {"a": 1} Thanks."#;
        assert_eq!(extract_envelope(raw), r#"{"a": 1}"#);
    }

    #[test]
    fn test_strips_markdown_fencing() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_envelope(raw), r#"{"a": 1}"#);
    }

    #[test]
    fn test_bare_object_unchanged() {
        assert_eq!(extract_envelope(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_no_braces_passes_trimmed_input_through() {
        assert_eq!(extract_envelope("  not json at all  "), "not json at all");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let inputs = [
            r#"prefix {"a": {"b": 2}} suffix"#,
            "```json\n{\"x\": [1, 2]}\n```",
            "no braces here",
            r#"{"plain": true}"#,
        ];
        for raw in inputs {
            let once = extract_envelope(raw);
            assert_eq!(extract_envelope(once), once, "not idempotent for: {raw}");
        }
    }

    #[test]
    fn test_lone_brace_passes_through() {
        assert_eq!(extract_envelope("only { opening"), "only { opening");
        assert_eq!(extract_envelope("only } closing"), "only } closing");
    }
}
