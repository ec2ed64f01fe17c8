//! Display-only citation translation.
//!
//! Rewrites the leading book-name token of a citation string into a target
//! language's stored book name, leaving the chapter/verse remainder as it
//! is. Works on the raw string, so plan entries the citation parser
//! rejects (e.g. `마1-4`, `요 3,4`) still translate.

use crate::language::Language;
use crate::registry::BookRegistry;

/// A translated display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub text: String,
    /// `false` when the input was returned as-is.
    pub translated: bool,
}

impl Translated {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            translated: false,
        }
    }
}

/// Split `text` into its leading book-name run and the remainder.
///
/// The run ends at the first ASCII digit or whitespace character.
fn split_book(text: &str) -> (&str, &str) {
    let end = text
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() || c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Re-render the book name of `text` for `lang`.
///
/// Returned unchanged for the source language, for empty input, and when
/// the leading token has no mapping. A single space is put between the
/// translated name and a remainder that starts directly with the chapter.
pub fn translate_display(registry: &BookRegistry, text: &str, lang: Language) -> Translated {
    if lang.is_source() || text.trim().is_empty() {
        return Translated::unchanged(text);
    }

    let leading_ws = text.len() - text.trim_start().len();
    let (indent, body) = text.split_at(leading_ws);
    let (book, rest) = split_book(body);
    if book.is_empty() {
        return Translated::unchanged(text);
    }

    let resolved = registry.resolve(book, lang);
    if resolved.fallback {
        return Translated::unchanged(text);
    }

    let separator = if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        ""
    } else {
        " "
    };
    Translated {
        text: format!("{}{}{}{}", indent, resolved.name, separator, rest),
        translated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_language_is_noop() {
        let registry = BookRegistry::builtin();
        let t = translate_display(&registry, "삼상 8:1-22", Language::Ko);
        assert_eq!(t.text, "삼상 8:1-22");
        assert!(!t.translated);
    }

    #[test]
    fn test_empty_is_noop() {
        let registry = BookRegistry::builtin();
        assert_eq!(translate_display(&registry, "", Language::En).text, "");
        assert!(!translate_display(&registry, "  ", Language::Mn).translated);
    }

    #[test]
    fn test_remainder_untouched() {
        let registry = BookRegistry::builtin();
        let t = translate_display(&registry, "삼상 8:1-22", Language::En);
        assert_eq!(t.text, "1Sam 8:1-22");
        assert!(t.translated);
    }

    #[test]
    fn test_unparseable_chapter_list() {
        let registry = BookRegistry::builtin();
        assert_eq!(translate_display(&registry, "마1-4", Language::Mn).text, "Мат 1-4");
        assert_eq!(
            translate_display(&registry, "요 3,4", Language::En).text,
            "John 3,4"
        );
    }

    #[test]
    fn test_full_name_token() {
        let registry = BookRegistry::builtin();
        assert_eq!(translate_display(&registry, "잠언 14", Language::En).text, "Prov 14");
    }

    #[test]
    fn test_unknown_book_unchanged() {
        let registry = BookRegistry::builtin();
        let t = translate_display(&registry, "주일 개인독서", Language::En);
        assert_eq!(t.text, "주일 개인독서");
        assert!(!t.translated);

        let t = translate_display(&registry, "14", Language::En);
        assert_eq!(t.text, "14");
        assert!(!t.translated);
    }
}
