//! Verse storage abstraction.
//!
//! The [`VerseStore`] trait is the read path the lookup gateway needs:
//! verses of one book and chapter in one language, narrowed by a
//! [`VerseRange`], ascending by verse number. [`SqliteVerseStore`](crate::sqlite_store::SqliteVerseStore)
//! is the production backend; [`InMemoryVerseStore`] backs tests and
//! dry runs.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::language::Language;
use crate::models::{Verse, VerseRange, VerseRow};

/// Read-only verse lookup, one table per language.
#[async_trait]
pub trait VerseStore: Send + Sync {
    /// Verses of `book` (a stored book name) in `chapter`, ordered by verse.
    async fn verses(
        &self,
        lang: Language,
        book: &str,
        chapter: u32,
        range: VerseRange,
    ) -> Result<Vec<VerseRow>>;
}

/// In-memory store for tests.
///
/// A language with no inserted verses behaves like a missing table and
/// returns an error, the same way SQLite does.
pub struct InMemoryVerseStore {
    tables: RwLock<HashMap<Language, Vec<Verse>>>,
}

impl InMemoryVerseStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, lang: Language, verses: impl IntoIterator<Item = Verse>) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.entry(lang).or_default().extend(verses);
    }
}

impl Default for InMemoryVerseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerseStore for InMemoryVerseStore {
    async fn verses(
        &self,
        lang: Language,
        book: &str,
        chapter: u32,
        range: VerseRange,
    ) -> Result<Vec<VerseRow>> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        let table = tables
            .get(&lang)
            .ok_or_else(|| anyhow!("no such table: {}", lang.table()))?;

        let mut rows: Vec<VerseRow> = table
            .iter()
            .filter(|v| v.book == book && v.chapter == chapter && range.contains(v.verse))
            .map(|v| VerseRow {
                number: v.verse,
                content: v.content.clone(),
            })
            .collect();
        rows.sort_by_key(|r| r.number);
        Ok(rows)
    }
}
