//! Passage rendering.
//!
//! A passage is a header line `(<book> <chapter>[:<verses>] / <version>)`
//! followed by one `"<n>. <content>"` line per verse.

use crate::language::Language;
use crate::models::{Citation, VerseRange, VerseRow};
use crate::registry::BookRegistry;

/// Header line for a citation in `lang`.
pub fn header(registry: &BookRegistry, citation: &Citation, lang: Language) -> String {
    let book = registry.display_name(&citation.book, lang);
    let reference = match citation.verses() {
        VerseRange::Chapter => format!("{} {}", book, citation.chapter),
        VerseRange::Single(v) => format!("{} {}:{}", book, citation.chapter, v),
        VerseRange::Span(start, end) => {
            format!("{} {}:{}-{}", book, citation.chapter, start, end)
        }
    };
    format!("({} / {})", reference, lang.version())
}

/// Render rows as a passage block, or `None` when there are no rows.
pub fn format_passage(
    registry: &BookRegistry,
    citation: &Citation,
    lang: Language,
    rows: &[VerseRow],
) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header(registry, citation, lang));
    for row in rows {
        lines.push(format!("{}. {}", row.number, row.content));
    }
    Some(lines.join("\n"))
}
