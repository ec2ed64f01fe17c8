//! Reading-plan store.
//!
//! Plans live in one JSON file per month (`<dir>/MM.json`) mapping the
//! day of month, as a string, to four citations:
//!
//! ```json
//! { "1": ["마1-4", "1", "1", "창 1:1-25"], "2": [null, "2", "2", "창 2:1-17"] }
//! ```
//!
//! The columns are New Testament, Psalms, Proverbs and the QT passage.
//! `null` is read as an empty entry, and a bare number (`35`) as its
//! decimal text.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::Deserialize;

use crate::config::Config;
use crate::models::PlanEntry;

/// One plan column: a citation string or a bare chapter number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColumn {
    Text(String),
    Number(u64),
}

fn column_text(column: Option<RawColumn>) -> String {
    match column {
        Some(RawColumn::Text(text)) => text,
        Some(RawColumn::Number(n)) => n.to_string(),
        None => String::new(),
    }
}

type RawDay = (
    Option<RawColumn>,
    Option<RawColumn>,
    Option<RawColumn>,
    Option<RawColumn>,
);

/// One month of plan entries, keyed by day of month.
#[derive(Debug, Clone, Default)]
pub struct MonthPlan {
    days: HashMap<String, PlanEntry>,
}

impl MonthPlan {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, RawDay> = serde_json::from_str(json)?;
        let days = raw
            .into_iter()
            .map(|(day, (nt, ps, pr, qt))| {
                let entry = PlanEntry {
                    new_testament: column_text(nt),
                    psalms: column_text(ps),
                    proverbs: column_text(pr),
                    quiet_time: column_text(qt),
                };
                (day.trim().to_string(), entry)
            })
            .collect();
        Ok(Self { days })
    }

    /// Entry for a day of month, if the plan has one.
    pub fn day(&self, day: u32) -> Option<&PlanEntry> {
        self.days.get(&day.to_string())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Load `<dir>/MM.json`. A missing file is an empty plan.
pub fn load_month(dir: &Path, month: u32) -> Result<MonthPlan> {
    let path = dir.join(format!("{:02}.json", month));
    if !path.exists() {
        log::info!("no plan file at {}", path.display());
        return Ok(MonthPlan::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    MonthPlan::from_json(&content)
        .with_context(|| format!("Failed to parse plan file: {}", path.display()))
}

/// Plan entry for a calendar date.
pub fn entry_for(config: &Config, date: NaiveDate) -> Result<Option<PlanEntry>> {
    let month = load_month(&config.plan.dir, date.month())?;
    Ok(month.day(date.day()).cloned())
}

/// Today's date at the configured UTC offset.
pub fn today(utc_offset_hours: i32) -> NaiveDate {
    (Utc::now() + Duration::hours(utc_offset_hours as i64)).date_naive()
}

/// Parse `--date YYYY-MM-DD`, or fall back to today.
pub fn resolve_date(config: &Config, date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s)),
        None => Ok(today(config.plan.utc_offset_hours)),
    }
}

/// CLI entry point for `dv plan`.
pub fn run_plan(config: &Config, date: Option<&str>) -> Result<()> {
    let date = resolve_date(config, date)?;
    let Some(entry) = entry_for(config, date)? else {
        println!("no plan entry for {}", date);
        return Ok(());
    };

    println!("--- Plan {} ---", date);
    println!("nt:       {}", entry.new_testament);
    println!("psalms:   {}", entry.psalms);
    println!("proverbs: {}", entry.proverbs);
    println!("qt:       {}", entry.quiet_time);
    Ok(())
}
