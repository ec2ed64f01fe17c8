//! # Daily Verse CLI (`dv`)
//!
//! The `dv` binary prepares the verse database, looks up passages, and
//! runs the daily broadcast. It is meant to be invoked once a day by an
//! external scheduler (cron, systemd timer) with `dv broadcast`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dv init` | Create the per-language verse tables |
//! | `dv import <lang> <file>` | Import `Book C:V text` lines into a language table |
//! | `dv passage "<citation>"` | Print a formatted passage |
//! | `dv translate "<citation>"` | Print a citation with its book name translated |
//! | `dv plan` | Show the reading-plan entry for a date |
//! | `dv broadcast` | Send the day's summary and passages to every recipient |
//! | `dv stats` | Show per-language table statistics |
//!
//! ## Examples
//!
//! ```bash
//! dv init --config ./config/dv.toml
//! dv import en ./ESV.txt --replace
//! dv passage "잠언 14" --lang mn
//! dv broadcast --date 2026-01-15 --dry-run
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use daily_verse::language::Language;
use daily_verse::{broadcast, config, import, migrate, passage, plan, stats};

/// Daily Verse CLI: multi-language daily scripture readings.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file.
#[derive(Parser)]
#[command(
    name = "dv",
    about = "Daily Verse: multi-language daily scripture delivery",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/dv.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and one verse table per language.
    /// Safe to run repeatedly.
    Init,

    /// Import verses from a UTF-8 text file.
    ///
    /// Each line must look like `<book><chapter>:<verse> <text>`.
    Import {
        /// Target language: ko, en or mn.
        language: Language,

        /// Path to the verse file.
        file: PathBuf,

        /// Clear the language's table before importing.
        #[arg(long)]
        replace: bool,
    },

    /// Look up and print a passage.
    Passage {
        /// Citation, e.g. "삼상 8:1-22" or "잠언 14".
        citation: String,

        /// Language of the verse text. Unknown codes use the source language.
        #[arg(long, default_value = "ko")]
        lang: String,
    },

    /// Print a citation with its book name in another language.
    Translate {
        /// Citation as written in the plan.
        citation: String,

        /// Target language.
        #[arg(long)]
        lang: Language,
    },

    /// Show the reading-plan entry for a date.
    Plan {
        /// Date (YYYY-MM-DD). Defaults to today at the configured UTC offset.
        #[arg(long)]
        date: Option<String>,
    },

    /// Send the day's messages to every configured recipient.
    Broadcast {
        /// Date (YYYY-MM-DD). Defaults to today at the configured UTC offset.
        #[arg(long)]
        date: Option<String>,

        /// Print messages instead of sending them.
        #[arg(long)]
        dry_run: bool,
    },

    /// Show per-language verse table statistics.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .filter_module("sqlx", log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Import {
            language,
            file,
            replace,
        } => {
            import::run_import(&cfg, language, &file, replace).await?;
        }
        Commands::Passage { citation, lang } => {
            let lang = Language::parse_or_source(&lang);
            passage::run_passage(&cfg, &citation, lang).await?;
        }
        Commands::Translate { citation, lang } => {
            passage::run_translate(&cfg, &citation, lang)?;
        }
        Commands::Plan { date } => {
            plan::run_plan(&cfg, date.as_deref())?;
        }
        Commands::Broadcast { date, dry_run } => {
            broadcast::run_broadcast(&cfg, date.as_deref(), dry_run).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
    }

    Ok(())
}
