/// Split text into lines at every recognised line boundary.
///
/// Boundaries are `\n`, `\r\n`, `\r`, vertical tab, form feed, the ASCII
/// file/group/record separators, NEL, LINE SEPARATOR and PARAGRAPH
/// SEPARATOR. Empty input yields no lines, and a trailing boundary does not
/// produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut end = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                end = next_idx + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_single_line_without_break() {
        assert_eq!(split_lines("only one line"), vec!["only one line"]);
    }

    #[test]
    fn test_trailing_newline_is_dropped() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_blank_line_before_trailing_newline_is_kept() {
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_lone_newline_is_one_empty_line() {
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_mixed_line_endings() {
        assert_eq!(split_lines("a\r\nb\rc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("x\r\n"), vec!["x"]);
    }

    #[test]
    fn test_unicode_separators() {
        assert_eq!(split_lines("α\u{2028}β\u{85}γ"), vec!["α", "β", "γ"]);
        assert_eq!(split_lines("p\x0cq\x1er"), vec!["p", "q", "r"]);
    }
}
