use std::collections::HashMap;

/// Minimum length of the second sequence before popular elements are
/// excluded from seeding matches.
const POPULAR_MIN_LEN: usize = 200;

/// A run of equal elements: `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Similarity ratio in `[0, 1]` between two texts, `2*M / (len(a) + len(b))`
/// where `M` is the number of characters covered by matching blocks.
///
/// Two empty strings are fully similar; one empty string against a
/// non-empty one scores zero.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = SequenceMatcher::new(&a, &b)
        .matching_blocks()
        .iter()
        .map(|m| m.len)
        .sum();
    2.0 * matched as f64 / total as f64
}

/// Matching blocks between two texts, sorted by position.
pub fn matching_blocks(a: &str, b: &str) -> Vec<MatchBlock> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).matching_blocks()
}

/// Ratcliff/Obershelp matcher over two element slices.
///
/// Elements of `b` that are too frequent in a long `b` never seed a match,
/// though an already-found match may still grow across them.
struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut blocks = Vec::new();
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
            let m = self.longest_match(a_lo, a_hi, b_lo, b_hi);
            if m.len == 0 {
                continue;
            }
            if a_lo < m.a_start && b_lo < m.b_start {
                queue.push((a_lo, m.a_start, b_lo, m.b_start));
            }
            if m.a_start + m.len < a_hi && m.b_start + m.len < b_hi {
                queue.push((m.a_start + m.len, a_hi, m.b_start + m.len, b_hi));
            }
            blocks.push(m);
        }

        blocks.sort();
        blocks
    }

    /// Longest block inside `a[a_lo..a_hi]` x `b[b_lo..b_hi]`. Ties go to the
    /// block starting earliest in `a`, then earliest in `b`.
    fn longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> MatchBlock {
        let (a, b) = (self.a, self.b);
        let mut best = MatchBlock { a_start: a_lo, b_start: b_lo, len: 0 };

        // run length of the match ending at (i - 1, j), keyed by j
        let mut run_len: HashMap<usize, usize> = HashMap::new();
        for (i, ch) in a.iter().enumerate().take(a_hi).skip(a_lo) {
            let mut next_run_len = HashMap::new();
            if let Some(positions) = self.b2j.get(ch) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = j.checked_sub(1).and_then(|p| run_len.get(&p)).copied().unwrap_or(0) + 1;
                    next_run_len.insert(j, k);
                    if k > best.len {
                        best = MatchBlock { a_start: i + 1 - k, b_start: j + 1 - k, len: k };
                    }
                }
            }
            run_len = next_run_len;
        }

        while best.a_start > a_lo && best.b_start > b_lo && a[best.a_start - 1] == b[best.b_start - 1] {
            best.a_start -= 1;
            best.b_start -= 1;
            best.len += 1;
        }
        while best.a_start + best.len < a_hi
            && best.b_start + best.len < b_hi
            && a[best.a_start + best.len] == b[best.b_start + best.len]
        {
            best.len += 1;
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_are_fully_similar() {
        assert_eq!(similarity_ratio("F=ma", "F=ma"), 1.0);
        assert_eq!(similarity_ratio("línea\nsegunda", "línea\nsegunda"), 1.0);
    }

    #[test]
    fn test_identity_holds_for_long_repetitive_text() {
        let text = "ab ".repeat(120);
        assert_eq!(similarity_ratio(&text, &text), 1.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("", "abc"), 0.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        assert!((similarity_ratio("abcd", "bcde") - 0.75).abs() < 1e-12);
        assert!((similarity_ratio("hello world", "hallo world") - 20.0 / 22.0).abs() < 1e-12);
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_gaps_are_filled_recursively() {
        // "ab" and "ef" both match around the differing middle.
        let blocks = matching_blocks("abXYef", "abZef");
        assert_eq!(
            blocks,
            vec![
                MatchBlock { a_start: 0, b_start: 0, len: 2 },
                MatchBlock { a_start: 4, b_start: 3, len: 2 },
            ]
        );
    }

    #[test]
    fn test_longest_block_wins_over_earlier_short_one() {
        // "ab" and "bcd" compete for b; the longer block is taken first.
        let blocks = matching_blocks("abcd", "bcdab");
        assert_eq!(blocks, vec![MatchBlock { a_start: 1, b_start: 0, len: 3 }]);
    }

    #[test]
    fn test_identical_strings_form_one_block() {
        let blocks = matching_blocks("force = mass", "force = mass");
        assert_eq!(blocks, vec![MatchBlock { a_start: 0, b_start: 0, len: 12 }]);
    }

    #[test]
    fn test_popular_elements_do_not_seed_matches() {
        let long = format!("x{}", "a".repeat(250));
        assert_eq!(similarity_ratio("aaa", &long), 0.0);
        // With the long text first, the short side has no popular elements.
        let reverse = similarity_ratio(&long, "aaa");
        assert!((reverse - 6.0 / 254.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_stays_in_unit_interval() {
        let cases = [("a", "b"), ("abc", "abcabc"), ("The formula", "formula"), ("\n\n", "\n")];
        for (a, b) in cases {
            let r = similarity_ratio(a, b);
            assert!((0.0..=1.0).contains(&r), "{a:?} vs {b:?} gave {r}");
        }
    }
}
