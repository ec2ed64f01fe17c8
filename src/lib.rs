//! # Daily Verse
//!
//! Delivers a daily reading plan and its scripture passages to subscribers
//! in several languages, reading verses from a per-language SQLite store.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │ Plan JSON │──▶│ Citation │──▶│  Lookup  │──▶│  Format  │
//! │ (4/day)   │   │  Parser  │   │ (SQLite) │   │ + Chunk  │
//! └─────┬─────┘   └──────────┘   └────┬─────┘   └────┬─────┘
//!       │                             │              │
//!       ▼                             ▼              ▼
//!  ┌───────────┐               ┌──────────┐   ┌──────────┐
//!  │ Translate │               │ Registry │   │ Delivery │
//!  │ (display) │               │ (books)  │   │(Telegram)│
//!  └───────────┘               └──────────┘   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! dv init                               # create verse tables
//! dv import ko ./krv.txt                # load a translation
//! dv passage "삼상 8:1-22" --lang en     # look up a passage
//! dv broadcast --dry-run                # preview today's messages
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`language`] | Supported languages and their tables |
//! | [`registry`] | Canonical → stored book names |
//! | [`citation`] | Citation parsing |
//! | [`store`] | Verse store trait and in-memory store |
//! | [`sqlite_store`] | SQLite verse store |
//! | [`lookup`] | Citation → verse rows |
//! | [`format`] | Passage rendering |
//! | [`translate`] | Display-only citation translation |
//! | [`chunk`] | Message chunking |
//! | [`plan`] | Monthly reading plans |
//! | [`messages`] | Summary message templates |
//! | [`delivery`] | Outbound transports |
//! | [`broadcast`] | Daily broadcast |
//! | [`import`] | Plain-text verse import |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |

pub mod broadcast;
pub mod chunk;
pub mod citation;
pub mod config;
pub mod db;
pub mod delivery;
pub mod format;
pub mod import;
pub mod language;
pub mod lookup;
pub mod messages;
pub mod migrate;
pub mod models;
pub mod passage;
pub mod plan;
pub mod registry;
pub mod sqlite_store;
pub mod stats;
pub mod store;
pub mod translate;
