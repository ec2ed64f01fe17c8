//! Citation → passage text.
//!
//! Glues the parser, the lookup gateway and the formatter together. Used by
//! the `dv passage` command and by the daily broadcast.

use anyhow::{bail, Result};

use crate::citation;
use crate::config::Config;
use crate::db;
use crate::format::format_passage;
use crate::language::Language;
use crate::lookup;
use crate::models::Citation;
use crate::registry::BookRegistry;
use crate::sqlite_store::SqliteVerseStore;
use crate::store::VerseStore;
use crate::translate::translate_display;

/// Fetch and format an already-parsed citation.
pub async fn render_citation(
    store: &dyn VerseStore,
    registry: &BookRegistry,
    citation: &Citation,
    lang: Language,
) -> Option<String> {
    let rows = lookup::fetch(store, registry, citation, lang).await;
    format_passage(registry, citation, lang, &rows)
}

/// Parse `text` and render the passage it names.
///
/// `None` when the text is not a citation or no verses match.
pub async fn render_passage(
    store: &dyn VerseStore,
    registry: &BookRegistry,
    text: &str,
    lang: Language,
) -> Option<String> {
    let citation = match citation::parse(text) {
        Ok(c) => c,
        Err(e) => {
            log::info!("[{}] skipping passage: {}", lang, e);
            return None;
        }
    };
    render_citation(store, registry, &citation, lang).await
}

/// CLI entry point for `dv passage`.
pub async fn run_passage(config: &Config, text: &str, lang: Language) -> Result<()> {
    let registry = BookRegistry::from_config(config);
    let pool = db::connect_read_only(config).await?;
    let store = SqliteVerseStore::new(pool);

    let passage = render_passage(&store, &registry, text, lang).await;
    store.close().await;

    match passage {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => bail!("no verses found for '{}' ({})", text, lang),
    }
}

/// CLI entry point for `dv translate`.
pub fn run_translate(config: &Config, text: &str, lang: Language) -> Result<()> {
    let registry = BookRegistry::from_config(config);
    let translated = translate_display(&registry, text, lang);
    if !translated.translated && !lang.is_source() {
        log::info!("'{}' left as-is for {}", text, lang);
    }
    println!("{}", translated.text);
    Ok(())
}
