//! SQLite-backed [`VerseStore`] implementation.
//!
//! Each [`Language`] owns one table (`Language::table`). Lookups filter by
//! stored book name and chapter, then by the verse window, and always
//! order ascending by verse. The catalog helpers at the bottom back the
//! `import` and `stats` commands.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::language::Language;
use crate::models::{Verse, VerseRange, VerseRow};
use crate::store::VerseStore;

/// SQLite implementation of the [`VerseStore`] trait.
pub struct SqliteVerseStore {
    pool: SqlitePool,
}

impl SqliteVerseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Whether the language's table exists in this database.
    pub async fn table_exists(&self, lang: Language) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name = ?",
        )
        .bind(lang.table())
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert verses in one transaction, optionally clearing the table first.
    ///
    /// Existing `(book, chapter, verse)` rows are overwritten. Returns the
    /// number of rows written.
    pub async fn insert_verses(
        &self,
        lang: Language,
        verses: &[Verse],
        replace: bool,
    ) -> Result<u64> {
        let table = lang.table();
        let mut tx = self.pool.begin().await?;

        if replace {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await?;
        }

        let insert = format!(
            r#"
            INSERT INTO {table} (book, chapter, verse, content)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(book, chapter, verse) DO UPDATE SET
                content = excluded.content
            "#
        );

        let mut written = 0u64;
        for v in verses {
            sqlx::query(&insert)
                .bind(&v.book)
                .bind(v.chapter as i64)
                .bind(v.verse as i64)
                .bind(&v.content)
                .execute(&mut *tx)
                .await?;
            written += 1;
        }

        tx.commit().await?;
        Ok(written)
    }

    pub async fn verse_count(&self, lang: Language) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", lang.table()))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Distinct stored book names, in first-inserted order.
    pub async fn stored_books(&self, lang: Language) -> Result<Vec<String>> {
        let rows = sqlx::query(&format!(
            "SELECT book, MIN(rowid) AS first_row FROM {} GROUP BY book ORDER BY first_row ASC",
            lang.table()
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(|row| row.get("book")).collect())
    }
}

#[async_trait]
impl VerseStore for SqliteVerseStore {
    async fn verses(
        &self,
        lang: Language,
        book: &str,
        chapter: u32,
        range: VerseRange,
    ) -> Result<Vec<VerseRow>> {
        let table = lang.table();

        let rows = match range {
            VerseRange::Chapter => {
                sqlx::query(&format!(
                    "SELECT verse, content FROM {table} WHERE book = ? AND chapter = ? ORDER BY verse ASC"
                ))
                .bind(book)
                .bind(chapter as i64)
                .fetch_all(&self.pool)
                .await?
            }
            VerseRange::Single(verse) => {
                sqlx::query(&format!(
                    "SELECT verse, content FROM {table} WHERE book = ? AND chapter = ? AND verse = ? ORDER BY verse ASC"
                ))
                .bind(book)
                .bind(chapter as i64)
                .bind(verse as i64)
                .fetch_all(&self.pool)
                .await?
            }
            VerseRange::Span(start, end) => {
                sqlx::query(&format!(
                    "SELECT verse, content FROM {table} WHERE book = ? AND chapter = ? AND verse BETWEEN ? AND ? ORDER BY verse ASC"
                ))
                .bind(book)
                .bind(chapter as i64)
                .bind(start as i64)
                .bind(end as i64)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows
            .iter()
            .map(|row| VerseRow {
                number: row.get::<i64, _>("verse") as u32,
                content: row.get("content"),
            })
            .collect())
    }
}
