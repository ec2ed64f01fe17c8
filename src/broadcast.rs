//! Daily broadcast.
//!
//! For one date, every recipient receives, in order:
//!
//! 1. the summary message (plan citations translated for display),
//! 2. the QT passage,
//! 3. the full Psalms chapter,
//! 4. the full Proverbs chapter,
//!
//! every message chunked to the transport limit. Recipients and segments are
//! processed sequentially with a short pause between sends. Nothing here
//! aborts the broadcast: a missing passage sends nothing, and a failed send
//! is logged and skipped.

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;

use crate::chunk::chunk_message;
use crate::citation::leading_chapter;
use crate::config::Config;
use crate::db;
use crate::delivery::{self, Delivery};
use crate::language::Language;
use crate::messages;
use crate::models::{Citation, PlanEntry};
use crate::passage::{render_citation, render_passage};
use crate::plan;
use crate::registry::BookRegistry;
use crate::sqlite_store::SqliteVerseStore;
use crate::store::{InMemoryVerseStore, VerseStore};

/// Canonical books of the Psalms and Proverbs plan columns.
const PSALMS: &str = "시";
const PROVERBS: &str = "잠";

/// A resolved recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub language: Language,
    pub chat_id: String,
}

/// Counts from one broadcast run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub recipients: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Pacing and size settings for a broadcast.
#[derive(Debug, Clone)]
pub struct BroadcastOptions {
    pub chunk_limit: usize,
    pub summary_delay: Duration,
    pub passage_delay: Duration,
}

impl BroadcastOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            chunk_limit: config.delivery.chunk_limit,
            summary_delay: Duration::from_millis(config.delivery.summary_delay_ms),
            passage_delay: Duration::from_millis(config.delivery.passage_delay_ms),
        }
    }
}

pub struct Broadcaster<'a> {
    store: &'a dyn VerseStore,
    registry: &'a BookRegistry,
    delivery: &'a dyn Delivery,
    options: BroadcastOptions,
}

impl<'a> Broadcaster<'a> {
    pub fn new(
        store: &'a dyn VerseStore,
        registry: &'a BookRegistry,
        delivery: &'a dyn Delivery,
        options: BroadcastOptions,
    ) -> Self {
        Self {
            store,
            registry,
            delivery,
            options,
        }
    }

    /// Send one day's messages to every recipient.
    ///
    /// With no plan entry for the day nothing is sent.
    pub async fn broadcast(
        &self,
        recipients: &[Recipient],
        date: NaiveDate,
        entry: Option<&PlanEntry>,
    ) -> BroadcastReport {
        let mut report = BroadcastReport::default();
        let Some(entry) = entry else {
            log::info!("no plan entry for {}, nothing to send", date);
            return report;
        };

        for recipient in recipients {
            report.recipients += 1;
            self.send_recipient(recipient, date, entry, &mut report).await;
            log::info!("[{}] broadcast done", recipient.language);
        }
        report
    }

    async fn send_recipient(
        &self,
        recipient: &Recipient,
        date: NaiveDate,
        entry: &PlanEntry,
        report: &mut BroadcastReport,
    ) {
        let lang = recipient.language;

        let summary = messages::summary(self.registry, lang, date, entry);
        self.send_chunked(recipient, &summary, self.options.summary_delay, report)
            .await;

        if !entry.quiet_time.trim().is_empty() {
            let qt = render_passage(self.store, self.registry, &entry.quiet_time, lang).await;
            self.send_passage(recipient, qt, report).await;
        }

        for (book, raw) in [(PSALMS, &entry.psalms), (PROVERBS, &entry.proverbs)] {
            if raw.trim().is_empty() {
                continue;
            }
            let Some(chapter) = leading_chapter(raw) else {
                log::info!("[{}] no chapter number in '{}', skipping", lang, raw);
                continue;
            };
            let citation = Citation::chapter(book, chapter);
            let text = render_citation(self.store, self.registry, &citation, lang).await;
            self.send_passage(recipient, text, report).await;
        }
    }

    async fn send_passage(
        &self,
        recipient: &Recipient,
        text: Option<String>,
        report: &mut BroadcastReport,
    ) {
        let Some(text) = text else {
            return;
        };
        self.send_chunked(recipient, &text, self.options.passage_delay, report)
            .await;
    }

    /// Send `text` in segments of at most `chunk_limit` characters, pausing
    /// `delay` after each one.
    async fn send_chunked(
        &self,
        recipient: &Recipient,
        text: &str,
        delay: Duration,
        report: &mut BroadcastReport,
    ) {
        for segment in chunk_message(text, self.options.chunk_limit) {
            self.send(recipient, &segment, report).await;
            tokio::time::sleep(delay).await;
        }
    }

    async fn send(&self, recipient: &Recipient, text: &str, report: &mut BroadcastReport) {
        match self.delivery.send(&recipient.chat_id, text).await {
            Ok(()) => report.sent += 1,
            Err(e) => {
                report.failed += 1;
                log::warn!(
                    "[{}] {} send failed: {:#}",
                    recipient.language,
                    self.delivery.name(),
                    e
                );
            }
        }
    }
}

/// Recipients with a resolvable chat id, in config order.
pub fn recipients(config: &Config) -> Vec<Recipient> {
    config
        .recipients
        .iter()
        .filter_map(|r| match r.resolve_chat_id() {
            Some(chat_id) => Some(Recipient {
                language: r.language,
                chat_id,
            }),
            None => {
                log::warn!("[{}] no chat id configured, skipping", r.language);
                None
            }
        })
        .collect()
}

/// CLI entry point for `dv broadcast`.
pub async fn run_broadcast(config: &Config, date: Option<&str>, dry_run: bool) -> Result<()> {
    let date = plan::resolve_date(config, date)?;
    let entry = plan::entry_for(config, date)?;
    let recipients = recipients(config);
    let delivery = delivery::from_config(config, dry_run)?;
    let registry = BookRegistry::from_config(config);

    // An unreadable database still lets the summaries go out.
    let sqlite = match db::connect_read_only(config).await {
        Ok(pool) => Some(SqliteVerseStore::new(pool)),
        Err(e) => {
            log::warn!("verse store unavailable, passages will be skipped: {:#}", e);
            None
        }
    };
    let empty = InMemoryVerseStore::new();
    let store: &dyn VerseStore = match &sqlite {
        Some(s) => s,
        None => &empty,
    };

    let broadcaster = Broadcaster::new(
        store,
        &registry,
        delivery.as_ref(),
        BroadcastOptions::from_config(config),
    );
    let report = broadcaster.broadcast(&recipients, date, entry.as_ref()).await;

    if let Some(s) = sqlite {
        s.close().await;
    }

    println!("broadcast {}", date);
    println!("  recipients: {}", report.recipients);
    println!("  messages sent: {}", report.sent);
    println!("  failed: {}", report.failed);
    println!("ok");
    Ok(())
}
