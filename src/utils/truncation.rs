const MAX_PREVIEW_CHARS: usize = 200;
const MAX_ERROR_CHARS: usize = 2_000;

/// Short single-line preview of a model response, for log fields.
pub fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    truncate_chars(&flat, MAX_PREVIEW_CHARS)
}

/// Cap upstream error bodies before they reach an error message.
pub fn truncate_error(error: &str) -> String {
    truncate_chars(error, MAX_ERROR_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_error("bad request"), "bad request");
    }

    #[test]
    fn test_long_error_is_cut_on_char_boundary() {
        let long = "é".repeat(MAX_ERROR_CHARS + 5);
        let out = truncate_error(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), MAX_ERROR_CHARS + 3);
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("a\nb\tc"), "a b c");
    }
}
