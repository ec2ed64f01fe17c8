use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::language::Language;

/// Create every language's verse table and its lookup index.
pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    for lang in Language::ALL {
        let table = lang.table();

        // Table names come from the closed `Language` set, never from input.
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                book TEXT NOT NULL,
                chapter INTEGER NOT NULL,
                verse INTEGER NOT NULL,
                content TEXT NOT NULL,
                UNIQUE(book, chapter, verse)
            )
            "#
        ))
        .execute(&pool)
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table} ON {table} (book, chapter, verse)"
        ))
        .execute(&pool)
        .await?;

        log::debug!("ensured table {}", table);
    }

    pool.close().await;
    Ok(())
}
