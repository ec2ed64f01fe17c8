//! Line-boundary message chunker.
//!
//! Splits a passage into segments no longer than the transport's message
//! limit. Cuts happen at the last newline among the first `limit`
//! characters; the newline itself is dropped. A window with no newline
//! is hard-cut at the limit. Leading whitespace of the remainder is
//! trimmed after every cut, so no segment starts with a newline.
//!
//! Lengths are counted in characters, not bytes.

/// Split `text` into segments of at most `limit` characters.
///
/// Empty input yields no segments; input within the limit yields itself.
/// A `limit` of zero is treated as one.
pub fn chunk_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut segments = Vec::new();
    let mut remaining = text;

    while remaining.chars().count() > limit {
        // Byte offset of the first character past the window.
        let window_end = remaining
            .char_indices()
            .nth(limit)
            .map(|(i, _)| i)
            .unwrap_or(remaining.len());

        remaining = match remaining[..window_end].rfind('\n') {
            Some(i) => {
                // Blank leading lines cut off nothing.
                let head = &remaining[..i];
                if !head.trim().is_empty() {
                    segments.push(head.to_string());
                }
                &remaining[i + 1..]
            }
            None => {
                segments.push(remaining[..window_end].to_string());
                &remaining[window_end..]
            }
        };
        remaining = remaining.trim_start();
    }

    if !remaining.is_empty() {
        segments.push(remaining.to_string());
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(verses: usize) -> String {
        let mut lines = vec!["(Psalms 119 / ESV)".to_string()];
        lines.extend((1..=verses).map(|v| format!("{}. Blessed are those whose way is blameless", v)));
        lines.join("\n")
    }

    #[test]
    fn test_empty_text() {
        assert!(chunk_message("", 10).is_empty());
    }

    #[test]
    fn test_within_limit_single_segment() {
        assert_eq!(chunk_message("Hello, world!", 13), vec!["Hello, world!"]);
        assert_eq!(chunk_message("a\nb", 100), vec!["a\nb"]);
    }

    #[test]
    fn test_cuts_on_line_boundaries() {
        let text = passage(176);
        let segments = chunk_message(&text, 500);
        assert!(segments.len() > 1);
        for s in &segments {
            assert!(!s.is_empty());
            assert!(s.chars().count() <= 500);
            assert!(!s.ends_with('\n'));
        }
        assert_eq!(segments.join("\n"), text);
    }

    #[test]
    fn test_newline_exactly_at_limit() {
        let segments = chunk_message("abcde\nfgh", 5);
        assert_eq!(segments, vec!["abcde", "fgh"]);
    }

    #[test]
    fn test_hard_cut_without_newline() {
        let text = "x".repeat(25);
        let segments = chunk_message(&text, 10);
        assert_eq!(segments, vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]);
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "여호와는 나의 목자시니\n내가 부족함이 없으리로다";
        let segments = chunk_message(text, 13);
        assert_eq!(segments, vec!["여호와는 나의 목자시니", "내가 부족함이 없으리로다"]);
    }

    #[test]
    fn test_remainder_leading_whitespace_trimmed() {
        let segments = chunk_message("abc\n\n   def", 4);
        assert_eq!(segments, vec!["abc", "def"]);
    }

    #[test]
    fn test_leading_newline_is_not_kept() {
        assert_eq!(chunk_message("\nabcdef", 3), vec!["abc", "def"]);
        assert_eq!(chunk_message("\n\nab\ncd", 3), vec!["ab", "cd"]);
    }

    #[test]
    fn test_deterministic() {
        let text = passage(60);
        assert_eq!(chunk_message(&text, 300), chunk_message(&text, 300));
    }
}
