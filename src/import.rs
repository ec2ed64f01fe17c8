//! Plain-text verse import.
//!
//! Reads a UTF-8 file with one verse per line in the form
//! `<book><chapter>:<verse> <content>`, e.g. `창1:1 태초에 ...`,
//! `1 Kings 2:3 ...` or `Эхл 1:1 ...`, and writes it to a language's
//! table. Book names are stored exactly as they appear; the registry must
//! map canonical abbreviations to the same names.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::Config;
use crate::db;
use crate::language::Language;
use crate::migrate;
use crate::models::Verse;
use crate::sqlite_store::SqliteVerseStore;

fn verse_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+?)\s*(\d+):(\d+)\s+(.+)$").expect("verse line regex is valid")
    })
}

/// Parse one line of an import file. `None` for blank or malformed lines.
pub fn parse_verse_line(line: &str) -> Option<Verse> {
    let line = line.trim().trim_start_matches('\u{feff}');
    let caps = verse_line_re().captures(line)?;

    let book = caps[1].trim().to_string();
    let chapter: u32 = caps[2].parse().ok()?;
    let verse: u32 = caps[3].parse().ok()?;
    let content = caps[4].trim().to_string();
    if book.is_empty() || chapter == 0 || verse == 0 || content.is_empty() {
        return None;
    }

    Some(Verse {
        book,
        chapter,
        verse,
        content,
    })
}

/// Parsed verses plus the number of non-blank lines that did not match.
pub fn parse_verses(text: &str) -> (Vec<Verse>, usize) {
    let mut verses = Vec::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_verse_line(line) {
            Some(v) => verses.push(v),
            None => skipped += 1,
        }
    }
    (verses, skipped)
}

/// CLI entry point for `dv import`.
pub async fn run_import(config: &Config, lang: Language, file: &Path, replace: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read verse file: {}", file.display()))?;
    let (verses, skipped) = parse_verses(&text);
    if verses.is_empty() {
        anyhow::bail!("no verse lines found in {}", file.display());
    }

    migrate::run_migrations(config).await?;
    let store = SqliteVerseStore::new(db::connect(config).await?);
    let written = store.insert_verses(lang, &verses, replace).await?;
    store.close().await;

    log::info!("imported {} verses into {}", written, lang.table());
    println!("import {} {}", lang.code(), file.display());
    println!("  verses written: {}", written);
    println!("  lines skipped: {}", skipped);
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_line() {
        let v = parse_verse_line("창1:1 태초에 하나님이 천지를 창조하시니라").unwrap();
        assert_eq!(v.book, "창");
        assert_eq!(v.chapter, 1);
        assert_eq!(v.verse, 1);
        assert_eq!(v.content, "태초에 하나님이 천지를 창조하시니라");
    }

    #[test]
    fn test_book_with_digits_and_spaces() {
        let v = parse_verse_line("1 Kings 2:3 and keep the charge of the LORD").unwrap();
        assert_eq!(v.book, "1 Kings");
        assert_eq!(v.chapter, 2);
        assert_eq!(v.verse, 3);

        let v = parse_verse_line("1Сам 8:1 Самуел хөгширсөн хойно").unwrap();
        assert_eq!(v.book, "1Сам");
    }

    #[test]
    fn test_bom_and_whitespace() {
        let v = parse_verse_line("\u{feff}  시23:1 여호와는 나의 목자시니  ").unwrap();
        assert_eq!(v.book, "시");
        assert_eq!(v.content, "여호와는 나의 목자시니");
    }

    #[test]
    fn test_malformed_lines_counted() {
        let (verses, skipped) = parse_verses("창1:1 태초에\n\n제1장\n창1:2 땅이\n");
        assert_eq!(verses.len(), 2);
        assert_eq!(skipped, 1);
    }
}
