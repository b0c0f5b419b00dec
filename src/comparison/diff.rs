use similar::{ChangeTag, TextDiff};

/// Unified line diff of the extracted text against the validated text.
/// Display only; scoring and alignment never read it.
pub fn unified_diff(extracted: &str, validated: &str, context: usize) -> String {
    TextDiff::from_lines(extracted, validated)
        .unified_diff()
        .context_radius(context)
        .header("extracted", "validated")
        .to_string()
}

/// Count of (inserted, deleted) lines between the two texts.
pub fn line_change_counts(extracted: &str, validated: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(extracted, validated);
    diff.iter_all_changes()
        .fold((0, 0), |(ins, del), change| match change.tag() {
            ChangeTag::Insert => (ins + 1, del),
            ChangeTag::Delete => (ins, del + 1),
            ChangeTag::Equal => (ins, del),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_have_empty_diff() {
        assert!(unified_diff("a\nb\n", "a\nb\n", 3).is_empty());
        assert_eq!(line_change_counts("a\nb\n", "a\nb\n"), (0, 0));
    }

    #[test]
    fn test_changed_line_appears_in_diff() {
        let out = unified_diff("F = m/a\n", "F = ma\n", 1);
        assert!(out.contains("--- extracted"));
        assert!(out.contains("+++ validated"));
        assert!(out.contains("-F = m/a"));
        assert!(out.contains("+F = ma"));
    }

    #[test]
    fn test_insertion_counts_once() {
        let (ins, del) = line_change_counts("one\ntwo\n", "one\nextra\ntwo\n");
        assert_eq!((ins, del), (1, 0));
    }
}
