/// Locate the JSON object inside a model reply.
///
/// Models occasionally wrap the object in a Markdown code fence or add a
/// sentence around it. Returns the slice from the first `{` to the last `}`,
/// or the trimmed input when no braces are present.
pub(crate) fn json_object(raw: &str) -> &str {
    let trimmed = raw.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Locate the JSON object or array inside a model reply.
///
/// An array is taken when its `[` comes before any `{`, so a fenced bare
/// array keeps its brackets.
pub(crate) fn json_value(raw: &str) -> &str {
    let trimmed = raw.trim();
    let first_brace = trimmed.find('{');
    match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if start < end && first_brace.is_none_or(|b| start < b) => {
            &trimmed[start..=end]
        }
        _ => json_object(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        assert_eq!(json_object(r#" {"a":1} "#), r#"{"a":1}"#);
    }

    #[test]
    fn test_code_fence() {
        let raw = "```json\n{\"a\": {\"b\": 2}}\n```";
        assert_eq!(json_object(raw), "{\"a\": {\"b\": 2}}");
    }

    #[test]
    fn test_no_braces() {
        assert_eq!(json_object("  nothing here "), "nothing here");
    }

    #[test]
    fn test_value_prefers_leading_array() {
        let raw = "```json\n[{\"body\":\"one\"},{\"body\":\"two\"}]\n```";
        assert_eq!(json_value(raw), "[{\"body\":\"one\"},{\"body\":\"two\"}]");
    }

    #[test]
    fn test_value_keeps_object_with_inner_array() {
        let raw = "Sure:\n{\"variations\":[{\"body\":\"x\"}]}";
        assert_eq!(json_value(raw), "{\"variations\":[{\"body\":\"x\"}]}");
    }
}
