//! Citation parser.
//!
//! Turns a reference such as `삼상 8:1-22` or `잠언 14` into a [`Citation`].
//! The book token is the leading run of non-digit, non-space characters;
//! the chapter follows directly or after whitespace. A `:` introduces the
//! start verse and an optional `-` the end verse. Whitespace around every
//! component is ignored.
//!
//! Chapter and verse numbers must be positive and a range must not be
//! inverted; such references are rejected rather than matching nothing.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::Citation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a citation: '{0}'")]
    Shape(String),

    #[error("chapter and verse numbers must be positive: '{0}'")]
    NonPositive(String),

    #[error("verse range is inverted ({start} > {end}): '{text}'")]
    Inverted { text: String, start: u32, end: u32 },
}

fn citation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([^\d\s:\-]+)\s*(\d+)\s*(?::\s*(\d+)\s*(?:-\s*(\d+)\s*)?)?$")
            .expect("citation regex is valid")
    })
}

/// Parse a single citation string.
pub fn parse(text: &str) -> Result<Citation, ParseError> {
    let caps = citation_re()
        .captures(text)
        .ok_or_else(|| ParseError::Shape(text.to_string()))?;

    let number = |i: usize| -> Result<Option<u32>, ParseError> {
        caps.get(i)
            .map(|m| {
                m.as_str()
                    .parse::<u32>()
                    .map_err(|_| ParseError::Shape(text.to_string()))
            })
            .transpose()
    };

    let book = caps[1].to_string();
    let chapter = number(2)?.ok_or_else(|| ParseError::Shape(text.to_string()))?;
    let verse_start = number(3)?;
    let verse_end = number(4)?;

    if chapter == 0 || verse_start == Some(0) || verse_end == Some(0) {
        return Err(ParseError::NonPositive(text.to_string()));
    }
    if let (Some(start), Some(end)) = (verse_start, verse_end) {
        if start > end {
            return Err(ParseError::Inverted {
                text: text.to_string(),
                start,
                end,
            });
        }
    }

    Ok(Citation {
        book,
        chapter,
        verse_start,
        verse_end,
    })
}

/// Leading integer of a plan entry such as `14` or `14편`, used for the
/// chapter-only Psalms/Proverbs columns.
pub fn leading_chapter(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_range() {
        assert_eq!(
            parse("삼상 8:1-22").unwrap(),
            Citation {
                book: "삼상".to_string(),
                chapter: 8,
                verse_start: Some(1),
                verse_end: Some(22),
            }
        );
    }

    #[test]
    fn test_whole_chapter() {
        assert_eq!(parse("잠언 14").unwrap(), Citation::chapter("잠언", 14));
    }

    #[test]
    fn test_no_separator_between_book_and_chapter() {
        let c = parse("요3:16").unwrap();
        assert_eq!(c.book, "요");
        assert_eq!(c.chapter, 3);
        assert_eq!(c.verse_start, Some(16));
        assert_eq!(c.verse_end, None);
    }

    #[test]
    fn test_whitespace_insignificant() {
        assert_eq!(parse("  삼상8 : 1 - 22 ").unwrap(), parse("삼상 8:1-22").unwrap());
    }

    #[test]
    fn test_missing_chapter() {
        assert_eq!(parse("잠언"), Err(ParseError::Shape("잠언".to_string())));
        assert!(parse("").is_err());
        assert!(parse("14").is_err());
    }

    #[test]
    fn test_chapter_lists_are_not_citations() {
        assert!(parse("마1-4").is_err());
        assert!(parse("마 1,2").is_err());
        assert!(parse("삼상 8:1-").is_err());
    }

    #[test]
    fn test_zero_rejected() {
        assert!(matches!(parse("시 0"), Err(ParseError::NonPositive(_))));
        assert!(matches!(parse("시 1:0"), Err(ParseError::NonPositive(_))));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            parse("삼상 8:22-1"),
            Err(ParseError::Inverted { start: 22, end: 1, .. })
        ));
        assert!(parse("삼상 8:5-5").is_ok());
    }

    #[test]
    fn test_leading_chapter() {
        assert_eq!(leading_chapter("14"), Some(14));
        assert_eq!(leading_chapter(" 119편"), Some(119));
        assert_eq!(leading_chapter(""), None);
        assert_eq!(leading_chapter("0"), None);
    }
}
