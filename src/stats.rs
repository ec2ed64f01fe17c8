//! Verse table statistics and mapping check.
//!
//! Shows, per language, whether its table exists, how many verses and
//! distinct books it holds, and which canonical books resolve to a stored
//! name with no rows. The last column catches drift between the import
//! tooling's book names and the registry.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::language::Language;
use crate::registry::BookRegistry;
use crate::sqlite_store::SqliteVerseStore;

/// Per-language table summary.
struct LanguageStats {
    language: Language,
    exists: bool,
    verses: i64,
    books: usize,
    unmapped: Vec<String>,
}

async fn collect(
    store: &SqliteVerseStore,
    registry: &BookRegistry,
    lang: Language,
) -> Result<LanguageStats> {
    if !store.table_exists(lang).await? {
        return Ok(LanguageStats {
            language: lang,
            exists: false,
            verses: 0,
            books: 0,
            unmapped: Vec::new(),
        });
    }

    let stored = store.stored_books(lang).await?;
    let unmapped = registry
        .canonical_books()
        .filter(|book| !stored.contains(&registry.resolve(book, lang).name))
        .map(str::to_string)
        .collect();

    Ok(LanguageStats {
        language: lang,
        exists: true,
        verses: store.verse_count(lang).await?,
        books: stored.len(),
        unmapped,
    })
}

/// Run the stats command: query every language table and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let registry = BookRegistry::from_config(config);
    let store = SqliteVerseStore::new(db::connect_read_only(config).await?);

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Verse Store Stats");
    println!("=================");
    println!();
    println!("  Database:    {}", config.db.path.display());
    println!("  Size:        {}", format_bytes(db_size));
    println!();
    println!(
        "  {:<6} {:<14} {:<10} {:>8} {:>6}   {}",
        "LANG", "TABLE", "VERSION", "VERSES", "BOOKS", "NO ROWS"
    );
    println!("  {}", "-".repeat(72));

    for lang in Language::ALL {
        let stats = collect(&store, &registry, lang).await?;
        let missing = if !stats.exists {
            "table missing".to_string()
        } else if stats.unmapped.is_empty() {
            "-".to_string()
        } else if stats.unmapped.len() > 8 {
            format!("{} books", stats.unmapped.len())
        } else {
            stats.unmapped.join(" ")
        };
        println!(
            "  {:<6} {:<14} {:<10} {:>8} {:>6}   {}",
            stats.language.code(),
            stats.language.table(),
            stats.language.version(),
            stats.verses,
            stats.books,
            missing
        );
    }
    println!();

    store.close().await;
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }
}
