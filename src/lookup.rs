//! Verse lookup gateway.
//!
//! Resolves a citation's canonical book through the [`BookRegistry`] and
//! reads the matching rows from the language's table. Storage errors are
//! logged and reported as "no rows": one unreadable table must not abort
//! the sibling lookups of a multi-language broadcast.

use crate::language::Language;
use crate::models::{Citation, VerseRow};
use crate::registry::BookRegistry;
use crate::store::VerseStore;

/// Fetch the verses a citation denotes in `lang`, ascending by verse.
///
/// Empty when nothing matches or the store fails.
pub async fn fetch(
    store: &dyn VerseStore,
    registry: &BookRegistry,
    citation: &Citation,
    lang: Language,
) -> Vec<VerseRow> {
    let resolved = registry.resolve(&citation.book, lang);
    if resolved.fallback {
        log::info!(
            "[{}] book '{}' has no mapping, querying it unchanged",
            lang,
            citation.book
        );
    }

    match store
        .verses(lang, &resolved.name, citation.chapter, citation.verses())
        .await
    {
        Ok(rows) => {
            if rows.is_empty() {
                log::warn!(
                    "[{}] no verses in {} for book='{}' chapter={}",
                    lang,
                    lang.table(),
                    resolved.name,
                    citation.chapter
                );
            }
            rows
        }
        Err(e) => {
            log::warn!("[{}] verse lookup failed: {:#}", lang, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verse;
    use crate::store::InMemoryVerseStore;

    fn store() -> InMemoryVerseStore {
        let store = InMemoryVerseStore::new();
        let chapter = |book: &str, n: u32| {
            (1..=n)
                .map(|v| Verse {
                    book: book.to_string(),
                    chapter: 14,
                    verse: v,
                    content: format!("{} 14:{}", book, v),
                })
                .collect::<Vec<_>>()
        };
        store.insert(Language::Ko, chapter("잠", 35));
        store.insert(Language::En, chapter("Prov", 35));
        store
    }

    #[tokio::test]
    async fn test_whole_chapter_for_full_name() {
        let store = store();
        let registry = BookRegistry::builtin();
        let citation = crate::citation::parse("잠언 14").unwrap();

        let rows = fetch(&store, &registry, &citation, Language::Ko).await;
        assert_eq!(rows.len(), 35);
        assert!(rows.windows(2).all(|w| w[0].number < w[1].number));
    }

    #[tokio::test]
    async fn test_translated_book_and_range() {
        let store = store();
        let registry = BookRegistry::builtin();
        let citation = crate::citation::parse("잠 14:3-5").unwrap();

        let rows = fetch(&store, &registry, &citation, Language::En).await;
        let numbers: Vec<u32> = rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![3, 4, 5]);
        assert_eq!(rows[0].content, "Prov 14:3");
    }

    #[tokio::test]
    async fn test_single_verse() {
        let store = store();
        let registry = BookRegistry::builtin();
        let citation = crate::citation::parse("잠14:7").unwrap();

        let rows = fetch(&store, &registry, &citation, Language::Ko).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, 7);
    }

    #[tokio::test]
    async fn test_miss_is_empty() {
        let store = store();
        let registry = BookRegistry::builtin();
        let citation = Citation::chapter("잠", 99);
        assert!(fetch(&store, &registry, &citation, Language::Ko).await.is_empty());
    }

    #[tokio::test]
    async fn test_store_error_is_empty() {
        let store = store();
        let registry = BookRegistry::builtin();
        let citation = Citation::chapter("잠", 14);
        // No Mongolian table was populated.
        assert!(fetch(&store, &registry, &citation, Language::Mn).await.is_empty());
    }
}
